//! GPX output formatter

use crate::config::Config;
use crate::error::Result;
use crate::format::OutputFormatter;
use crate::point::Point;

/// GPX formatter - one waypoint per point
pub struct GpxFormatter;

/// Escape the characters XML text content cannot hold
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

impl OutputFormatter for GpxFormatter {
    fn name(&self) -> &str {
        "gpx"
    }

    fn description(&self) -> &str {
        "GPX waypoint file"
    }

    fn format(&self, points: &[&Point], _config: &Config) -> Result<String> {
        let mut gpx = String::new();

        // XML header
        gpx.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        gpx.push('\n');
        gpx.push_str(r#"<gpx version="1.1" creator="poke-map">"#);
        gpx.push('\n');

        gpx.push_str("  <metadata>\n");
        gpx.push_str("    <name>PokeMap</name>\n");
        gpx.push_str("  </metadata>\n");

        for point in points {
            let coords = point.coords();
            gpx.push_str(&format!(r#"  <wpt lat="{}" lon="{}">"#, coords.lat, coords.lng));
            gpx.push('\n');
            gpx.push_str(&format!("    <name>{}</name>\n", escape_xml(&point.label())));

            if !point.description().is_empty() {
                gpx.push_str(&format!("    <desc>{}</desc>\n", escape_xml(point.description())));
            }

            gpx.push_str("  </wpt>\n");
        }

        gpx.push_str("</gpx>\n");
        Ok(gpx)
    }
}
