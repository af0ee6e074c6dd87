//! JSON output formatter

use crate::config::Config;
use crate::error::Result;
use crate::format::OutputFormatter;
use crate::point::{Point, PointView};

/// JSON formatter - outputs the points as a pretty-printed array
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "JSON array of points"
    }

    fn format(&self, points: &[&Point], _config: &Config) -> Result<String> {
        let views: Vec<PointView> = points.iter().map(|p| PointView::from(*p)).collect();
        Ok(serde_json::to_string_pretty(&views)?)
    }
}
