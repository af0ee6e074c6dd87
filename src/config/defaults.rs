//! Default configuration values
//!
//! Named constants for all tunable parameters

use crate::constants::{api, map};

/// Default PokeAPI host
pub const DEFAULT_POKEAPI_URL: &str = api::POKEAPI_URL;

/// Default Nominatim host
pub const DEFAULT_NOMINATIM_URL: &str = api::NOMINATIM_URL;

/// Default seed source ("static" or "places")
pub const DEFAULT_SEED_SOURCE: &str = "static";

/// Default number of place search results to seed from
pub const DEFAULT_PLACES_LIMIT: usize = 10;

/// Default map center and zoom
pub const DEFAULT_CENTER_LAT: f64 = map::CENTER_LAT;
pub const DEFAULT_CENTER_LNG: f64 = map::CENTER_LNG;
pub const DEFAULT_ZOOM: u8 = map::ZOOM;

/// Default marker icon
pub const DEFAULT_MARKER_IMAGE: &str = map::MARKER_IMAGE;

/// Default street view image prefix
pub const DEFAULT_STREET_VIEW_URL: &str = api::STREET_VIEW_URL;

/// Default server host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_PORT: u16 = 7878;

/// Default URL provider
pub const DEFAULT_URL_PROVIDER: &str = "google";

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name (for XDG paths)
pub const APP_DIR_NAME: &str = "poke-map";
