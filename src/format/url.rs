//! URL output formatter

use crate::config::Config;
use crate::error::Result;
use crate::format::OutputFormatter;
use crate::point::Point;

/// URL formatter - outputs a map URL for every point
pub struct UrlFormatter;

impl UrlFormatter {
    /// Format URLs with optional provider override
    pub fn format_with_provider(
        &self,
        points: &[&Point],
        config: &Config,
        provider: Option<&str>,
    ) -> Result<String> {
        let mut output = String::new();

        for point in points {
            let coords = point.coords();
            let url = config.format_url(provider, coords.lat, coords.lng)?;
            output.push_str(&format!("{}\t{}\n", point.label(), url));
        }

        Ok(output)
    }
}

impl OutputFormatter for UrlFormatter {
    fn name(&self) -> &str {
        "url"
    }

    fn description(&self) -> &str {
        "Map URL per point"
    }

    fn format(&self, points: &[&Point], config: &Config) -> Result<String> {
        self.format_with_provider(points, config, None)
    }
}
