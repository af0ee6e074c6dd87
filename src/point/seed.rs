//! Seed sources for the point collection
//!
//! Points come either from the embedded table of PokeMap locations or from a
//! live place search.

use crate::error::{Error, Result};
use crate::geo::{GeoBackend, GeoLocation};
use crate::point::{Coordinates, SeedRow};
use tracing::info;

/// The 150 locations found during the 2014 Google Maps challenge
const POINTS_JSON: &str = include_str!("../../data/points.json");

/// Where the collection gets its rows
#[derive(Debug, Clone, PartialEq)]
pub enum SeedSource {
    /// Embedded location table
    Static,
    /// Place search results for the given query
    Places { query: String, limit: usize },
}

impl SeedSource {
    /// Load rows from this source
    pub async fn load<G: GeoBackend>(&self, geocoder: &G) -> Result<Vec<SeedRow>> {
        match self {
            Self::Static => static_rows(),
            Self::Places { query, limit } => place_rows(geocoder, query, *limit).await,
        }
    }
}

/// Parse the embedded location table
pub fn static_rows() -> Result<Vec<SeedRow>> {
    parse_rows(POINTS_JSON)
}

/// Parse and validate a JSON array of `{name, lat, lon}` rows
pub fn parse_rows(json: &str) -> Result<Vec<SeedRow>> {
    let rows: Vec<SeedRow> = serde_json::from_str(json)
        .map_err(|e| Error::Seed(format!("Failed to parse seed table: {}", e)))?;

    for row in &rows {
        if row.name.trim().is_empty() {
            return Err(Error::Seed("Seed row with empty name".to_string()));
        }
        Coordinates::new(row.lat, row.lon).validate()?;
    }

    Ok(rows)
}

/// Turn place search results into seed rows
pub async fn place_rows<G: GeoBackend>(geocoder: &G, query: &str, limit: usize) -> Result<Vec<SeedRow>> {
    let locations = geocoder.search(query, limit).await?;

    if locations.is_empty() {
        return Err(Error::Seed(format!("No places found for '{}'", query)));
    }

    info!("Place search '{}' returned {} results", query, locations.len());

    Ok(locations.iter().map(row_from_location).collect())
}

/// Short name is the first comma-separated part of the display name
fn row_from_location(location: &GeoLocation) -> SeedRow {
    let name = location
        .display_name
        .split(',')
        .next()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(&location.display_name);

    SeedRow::new(name, location.lat, location.lng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    struct FixedGeocoder(Vec<GeoLocation>);

    impl GeoBackend for FixedGeocoder {
        async fn search(&self, _query: &str, limit: usize) -> Result<Vec<GeoLocation>> {
            Ok(self.0.iter().take(limit).cloned().collect())
        }
    }

    fn location(name: &str, lat: f64, lng: f64) -> GeoLocation {
        GeoLocation {
            lat,
            lng,
            display_name: name.to_string(),
        }
    }

    #[test]
    fn test_static_table() {
        let rows = static_rows().unwrap();

        assert_eq!(rows.len(), 150);
        assert_eq!(rows[0].name, "Bulbasaur");
        assert_relative_eq!(rows[0].lat, 37.4236667);
        assert_relative_eq!(rows[0].lon, -122.0906058);
        assert_eq!(rows[1].name, "Ivysaur");
        assert_eq!(rows.last().unwrap().name, "Noivern");
    }

    #[test]
    fn test_static_table_special_names() {
        let rows = static_rows().unwrap();

        assert!(rows.iter().any(|r| r.name == "Meowstic (Male)"));
        assert!(rows.iter().any(|r| r.name == "Meowstic (Female)"));
        assert!(rows.iter().any(|r| r.name == "Pumpkaboo"));
    }

    #[test]
    fn test_parse_rows_invalid() {
        assert!(parse_rows("not json").is_err());
        assert!(parse_rows(r#"[{"name": "Bulbasaur", "lat": 37.4}]"#).is_err());
        assert!(parse_rows(r#"[{"name": "", "lat": 1.0, "lon": 1.0}]"#).is_err());
        assert!(parse_rows(r#"[{"name": "Mew", "lat": 100.0, "lon": 1.0}]"#).is_err());
    }

    #[test]
    fn test_row_from_location() {
        let row = row_from_location(&location("Golden Gate Park, San Francisco, CA", 37.76, -122.48));
        assert_eq!(row.name, "Golden Gate Park");
        assert_relative_eq!(row.lon, -122.48);

        let row = row_from_location(&location(", odd", 1.0, 2.0));
        assert_eq!(row.name, ", odd");
    }

    #[tokio::test]
    async fn test_place_rows() {
        let geocoder = FixedGeocoder(vec![
            location("Pier 39, San Francisco", 37.808, -122.409),
            location("Alcatraz Island, San Francisco", 37.826, -122.422),
            location("Coit Tower, San Francisco", 37.802, -122.405),
        ]);

        let rows = place_rows(&geocoder, "san francisco", 2).await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Pier 39");
        assert_eq!(rows[1].name, "Alcatraz Island");
    }

    #[tokio::test]
    async fn test_place_rows_empty() {
        let geocoder = FixedGeocoder(Vec::new());
        assert!(place_rows(&geocoder, "nowhere", 5).await.is_err());
    }

    #[tokio::test]
    async fn test_seed_source_static() {
        let geocoder = FixedGeocoder(Vec::new());
        let rows = SeedSource::Static.load(&geocoder).await.unwrap();
        assert_eq!(rows.len(), 150);
    }
}
