//! Output formatters
//!
//! Provides trait-based output formatting for lists of map points.

pub mod gpx;
pub mod json;
pub mod text;
pub mod url;

use crate::config::Config;
use crate::error::Result;
use crate::point::Point;
use serde::{Deserialize, Serialize};

/// Information about an output format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatInfo {
    /// Format name
    pub name: String,
    /// Format description
    pub description: String,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Get the format name
    fn name(&self) -> &str;

    /// Get the format description
    fn description(&self) -> &str;

    /// Format a list of points, in the order given
    ///
    /// # Arguments
    /// * `points` - The points to render (usually the visible ones)
    /// * `config` - Application config (for url providers, etc.)
    fn format(&self, points: &[&Point], config: &Config) -> Result<String>;
}

/// Get a formatter by name
pub fn get_formatter(name: &str) -> Option<Box<dyn OutputFormatter>> {
    match name.to_lowercase().as_str() {
        "json" => Some(Box::new(json::JsonFormatter)),
        "text" => Some(Box::new(text::TextFormatter)),
        "gpx" => Some(Box::new(gpx::GpxFormatter)),
        "url" => Some(Box::new(url::UrlFormatter)),
        _ => None,
    }
}

/// List all available formatters
pub fn available_formats() -> Vec<FormatInfo> {
    vec![
        FormatInfo {
            name: "json".to_string(),
            description: "JSON array of points".to_string(),
        },
        FormatInfo {
            name: "text".to_string(),
            description: "Human-readable list".to_string(),
        },
        FormatInfo {
            name: "gpx".to_string(),
            description: "GPX waypoint file".to_string(),
        },
        FormatInfo {
            name: "url".to_string(),
            description: "Map URL per point".to_string(),
        },
    ]
}

/// Two points, the first with full detail
#[cfg(test)]
pub(crate) fn sample_points() -> Vec<Point> {
    use crate::point::{Coordinates, Stat};

    let mut bulbasaur = Point::new("Bulbasaur", 1, Coordinates::new(37.4236667, -122.0906058));
    bulbasaur.set_stats(vec![
        Stat::new("HP", 45),
        Stat::new("Atk", 49),
        Stat::new("Def", 49),
        Stat::new("SpA", 65),
        Stat::new("SpD", 65),
        Stat::new("Spe", 45),
    ]);
    bulbasaur.set_image_url("http://pokeapi.co/media/img/1.png");
    bulbasaur.set_description("A strange seed was planted on its back at birth.");

    let ivysaur = Point::new("Ivysaur", 2, Coordinates::new(37.770204, -122.470158));

    vec![bulbasaur, ivysaur]
}
