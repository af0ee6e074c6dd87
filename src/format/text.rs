//! Human-readable text output formatter

use crate::config::Config;
use crate::error::Result;
use crate::format::OutputFormatter;
use crate::point::Point;

/// Width of a full stat bar, in characters
const STAT_BAR_WIDTH: f64 = 20.0;

/// Text formatter - one line per point
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Human-readable list"
    }

    fn format(&self, points: &[&Point], _config: &Config) -> Result<String> {
        let mut output = String::new();

        for point in points {
            let coords = point.coords();
            output.push_str(&format!(
                "{:<24} ({:.6}, {:.6})\n",
                point.label(),
                coords.lat,
                coords.lng
            ));
        }

        output.push_str(&format!("\n{} points\n", points.len()));
        Ok(output)
    }
}

/// Full detail panel for a single point
pub fn format_detail(point: &Point, config: &Config) -> String {
    let coords = point.coords();
    let mut output = String::new();

    output.push_str(&format!("{}\n", point.label()));
    output.push_str(&format!("Location: ({:.6}, {:.6})\n", coords.lat, coords.lng));
    output.push_str(&format!(
        "Street view: {}\n",
        point.street_view_url(&config.map.street_view_url)
    ));

    if !point.stats().is_empty() {
        output.push_str("\nStats:\n");
        for stat in point.stats() {
            let filled = (stat.percentage() / 100.0 * STAT_BAR_WIDTH).round() as usize;
            output.push_str(&format!(
                "  {:<4}{:>4} {}\n",
                stat.name,
                stat.value,
                "#".repeat(filled)
            ));
        }
    }

    if !point.image_url().is_empty() {
        output.push_str(&format!("\nImage: {}\n", point.image_url()));
    }

    if !point.description().is_empty() {
        output.push_str(&format!("\n{}\n", point.description()));
    }

    output
}
