//! Geocoding module
//!
//! Place search used to seed the collection from live results.

pub mod nominatim;

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// A geocoded location result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Latitude
    pub lat: f64,
    /// Longitude
    pub lng: f64,
    /// Display name (address or description)
    pub display_name: String,
}

/// Trait for geocoding backends
pub trait GeoBackend: Send + Sync {
    /// Search for up to `limit` places matching the query, best match first
    fn search(&self, query: &str, limit: usize) -> impl std::future::Future<Output = Result<Vec<GeoLocation>>> + Send;
}

/// Get the default geocoding backend
pub fn get_geocoder(base_url: &str) -> Result<nominatim::NominatimBackend> {
    nominatim::NominatimBackend::with_base_url(base_url)
}
