//! Centralized constants for the poke-map crate
//!
//! Values shared by the pipeline, the seed sources and the view helpers.

/// External API endpoints
pub mod api {
    /// PokeAPI v1 host; resource URIs in its responses are relative to it
    pub const POKEAPI_URL: &str = "http://pokeapi.co";

    /// Path prefix of the entity lookup endpoint
    pub const POKEMON_PATH: &str = "/api/v1/pokemon/";

    /// OpenStreetMap Nominatim geocoding API
    pub const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";

    /// Street view image endpoint, followed by "lat,lng"
    pub const STREET_VIEW_URL: &str =
        "http://maps.googleapis.com/maps/api/streetview?size=200x201&location=";

    /// User agent sent to every external service
    pub const USER_AGENT: &str = concat!("poke-map/", env!("CARGO_PKG_VERSION"));
}

/// Quirks of the PokeAPI v1 data set
pub mod pokeapi {
    /// Multi-word names are looked up by their male variant
    pub const MALE_SUFFIX: &str = "-male";

    /// Pumpkaboo only exists per size
    pub const AVERAGE_SIZE_NAME: &str = "pumpkaboo";
    pub const AVERAGE_SIZE_SUFFIX: &str = "-average";

    /// PokeAPI has no sprite for this variant
    pub const MANUAL_IMAGE_NAME: &str = "Meowstic (Female)";
    pub const MANUAL_IMAGE_URL: &str = "img/meowstic-female.png";

    /// Description generations accepted, by last character of the entry name
    pub const DESCRIPTION_GENERATIONS: [char; 2] = ['5', '6'];

    /// Largest possible base stat, used to scale stat bars
    pub const MAX_STAT: f64 = 255.0;
}

/// Map presentation defaults
pub mod map {
    /// The Googleplex, where the 2014 challenge started
    pub const CENTER_LAT: f64 = 37.422;
    pub const CENTER_LNG: f64 = -122.084058;

    pub const ZOOM: u8 = 17;

    pub const MARKER_IMAGE: &str = "img/PokeMarker.png";
}
