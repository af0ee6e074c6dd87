//! Configuration management
//!
//! Loads and saves configuration from XDG-compliant paths.
//! Config location: ~/.config/poke-map/config.toml

pub mod defaults;

use crate::error::{Error, Result};
use crate::point::seed::SeedSource;
use defaults::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// External API hosts
    #[serde(default)]
    pub api: ApiConfig,

    /// Where points come from
    #[serde(default)]
    pub seed: SeedConfig,

    /// Map presentation settings
    #[serde(default)]
    pub map: MapConfig,

    /// Server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// URL generation settings
    #[serde(default)]
    pub url: UrlConfig,
}

/// External API hosts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// PokeAPI host; sprite and description URIs are appended to it
    #[serde(default = "default_pokeapi_url")]
    pub pokeapi_url: String,

    /// Nominatim host used for place search
    #[serde(default = "default_nominatim_url")]
    pub nominatim_url: String,
}

/// Seed settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// "static" for the embedded table, "places" for a place search
    #[serde(default = "default_seed_source")]
    pub source: String,

    /// Query used when source is "places"
    #[serde(default)]
    pub places_query: String,

    /// Maximum number of place results
    #[serde(default = "default_places_limit")]
    pub places_limit: usize,
}

/// Map presentation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    #[serde(default = "default_center_lat")]
    pub center_lat: f64,

    #[serde(default = "default_center_lng")]
    pub center_lng: f64,

    #[serde(default = "default_zoom")]
    pub zoom: u8,

    /// Marker icon path
    #[serde(default = "default_marker_image")]
    pub marker_image: String,

    /// Street view image prefix, followed by "lat,lng"
    #[serde(default = "default_street_view_url")]
    pub street_view_url: String,
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

/// URL generation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlConfig {
    /// Default URL provider
    #[serde(default = "default_url_provider")]
    pub default: String,

    /// URL provider templates
    #[serde(default = "default_url_providers")]
    pub providers: HashMap<String, String>,
}

// Default value functions for serde
fn default_pokeapi_url() -> String {
    DEFAULT_POKEAPI_URL.to_string()
}
fn default_nominatim_url() -> String {
    DEFAULT_NOMINATIM_URL.to_string()
}
fn default_seed_source() -> String {
    DEFAULT_SEED_SOURCE.to_string()
}
fn default_places_limit() -> usize {
    DEFAULT_PLACES_LIMIT
}
fn default_center_lat() -> f64 {
    DEFAULT_CENTER_LAT
}
fn default_center_lng() -> f64 {
    DEFAULT_CENTER_LNG
}
fn default_zoom() -> u8 {
    DEFAULT_ZOOM
}
fn default_marker_image() -> String {
    DEFAULT_MARKER_IMAGE.to_string()
}
fn default_street_view_url() -> String {
    DEFAULT_STREET_VIEW_URL.to_string()
}
fn default_host() -> String {
    DEFAULT_HOST.to_string()
}
fn default_port() -> u16 {
    DEFAULT_PORT
}
fn default_url_provider() -> String {
    DEFAULT_URL_PROVIDER.to_string()
}
fn default_url_providers() -> HashMap<String, String> {
    let mut providers = HashMap::new();
    providers.insert(
        "google".to_string(),
        "https://www.google.com/maps/@{lat},{lng},{zoom}z".to_string(),
    );
    providers.insert(
        "openstreetmap".to_string(),
        "https://www.openstreetmap.org/#map={zoom}/{lat}/{lng}".to_string(),
    );
    providers.insert(
        "apple".to_string(),
        "https://maps.apple.com/?ll={lat},{lng}&z={zoom}".to_string(),
    );
    providers
}

// Implement Default traits
impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            seed: SeedConfig::default(),
            map: MapConfig::default(),
            server: ServerConfig::default(),
            url: UrlConfig::default(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            pokeapi_url: default_pokeapi_url(),
            nominatim_url: default_nominatim_url(),
        }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            source: default_seed_source(),
            places_query: String::new(),
            places_limit: default_places_limit(),
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center_lat: default_center_lat(),
            center_lng: default_center_lng(),
            zoom: default_zoom(),
            marker_image: default_marker_image(),
            street_view_url: default_street_view_url(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for UrlConfig {
    fn default() -> Self {
        Self {
            default: default_url_provider(),
            providers: default_url_providers(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(APP_DIR_NAME))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from the default path
    ///
    /// Creates default config if file doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a specific path, creating it if missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path).map_err(|e| {
                Error::Config(format!("Failed to read config file: {}", e))
            })?;

            toml::from_str(&content).map_err(|e| {
                Error::Config(format!("Failed to parse config file: {}", e))
            })
        } else {
            let config = Config::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            Error::Config(format!("Failed to serialize config: {}", e))
        })?;

        fs::write(path, content).map_err(|e| {
            Error::Config(format!("Failed to write config file: {}", e))
        })?;

        Ok(())
    }

    /// Get a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns the value as a string, or None if not found
    pub fn get(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["api", "pokeapi_url"] => Some(self.api.pokeapi_url.clone()),
            ["api", "nominatim_url"] => Some(self.api.nominatim_url.clone()),

            ["seed", "source"] => Some(self.seed.source.clone()),
            ["seed", "places_query"] => Some(self.seed.places_query.clone()),
            ["seed", "places_limit"] => Some(self.seed.places_limit.to_string()),

            ["map", "center_lat"] => Some(self.map.center_lat.to_string()),
            ["map", "center_lng"] => Some(self.map.center_lng.to_string()),
            ["map", "zoom"] => Some(self.map.zoom.to_string()),
            ["map", "marker_image"] => Some(self.map.marker_image.clone()),
            ["map", "street_view_url"] => Some(self.map.street_view_url.clone()),

            ["server", "host"] => Some(self.server.host.clone()),
            ["server", "port"] => Some(self.server.port.to_string()),

            ["url", "default"] => Some(self.url.default.clone()),

            _ => None,
        }
    }

    /// Set a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns error if key is invalid or value type is wrong
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["api", "pokeapi_url"] => {
                self.api.pokeapi_url = value.to_string();
            }
            ["api", "nominatim_url"] => {
                self.api.nominatim_url = value.to_string();
            }

            ["seed", "source"] => {
                if value != "static" && value != "places" {
                    return Err(Error::Config(format!("Invalid seed source: {}", value)));
                }
                self.seed.source = value.to_string();
            }
            ["seed", "places_query"] => {
                self.seed.places_query = value.to_string();
            }
            ["seed", "places_limit"] => {
                self.seed.places_limit = value.parse().map_err(|_| {
                    Error::Config(format!("Invalid limit value: {}", value))
                })?;
            }

            ["map", "center_lat"] => {
                self.map.center_lat = value.parse().map_err(|_| {
                    Error::Config(format!("Invalid latitude value: {}", value))
                })?;
            }
            ["map", "center_lng"] => {
                self.map.center_lng = value.parse().map_err(|_| {
                    Error::Config(format!("Invalid longitude value: {}", value))
                })?;
            }
            ["map", "zoom"] => {
                self.map.zoom = value.parse().map_err(|_| {
                    Error::Config(format!("Invalid zoom value: {}", value))
                })?;
            }
            ["map", "marker_image"] => {
                self.map.marker_image = value.to_string();
            }
            ["map", "street_view_url"] => {
                self.map.street_view_url = value.to_string();
            }

            ["server", "host"] => {
                self.server.host = value.to_string();
            }
            ["server", "port"] => {
                self.server.port = value.parse().map_err(|_| {
                    Error::Config(format!("Invalid port value: {}", value))
                })?;
            }

            ["url", "default"] => {
                self.url.default = value.to_string();
            }

            _ => {
                return Err(Error::Config(format!("Unknown config key: {}", key)));
            }
        }

        Ok(())
    }

    /// List all available config keys
    pub fn available_keys() -> Vec<&'static str> {
        vec![
            "api.pokeapi_url",
            "api.nominatim_url",
            "seed.source",
            "seed.places_query",
            "seed.places_limit",
            "map.center_lat",
            "map.center_lng",
            "map.zoom",
            "map.marker_image",
            "map.street_view_url",
            "server.host",
            "server.port",
            "url.default",
        ]
    }

    /// Seed source described by the `[seed]` section
    ///
    /// `places_query` overrides the configured query when given.
    pub fn seed_source(&self, places_query: Option<&str>) -> Result<SeedSource> {
        if let Some(query) = places_query {
            return Ok(SeedSource::Places {
                query: query.to_string(),
                limit: self.seed.places_limit,
            });
        }

        match self.seed.source.as_str() {
            "static" => Ok(SeedSource::Static),
            "places" if self.seed.places_query.is_empty() => Err(Error::Config(
                "seed.source is \"places\" but seed.places_query is empty".to_string(),
            )),
            "places" => Ok(SeedSource::Places {
                query: self.seed.places_query.clone(),
                limit: self.seed.places_limit,
            }),
            other => Err(Error::Config(format!("Unknown seed source: {}", other))),
        }
    }

    /// Format a map URL using the specified provider
    ///
    /// Replaces {lat}, {lng} and {zoom} placeholders with actual values
    pub fn format_url(&self, provider: Option<&str>, lat: f64, lng: f64) -> Result<String> {
        let provider_name = provider.unwrap_or(&self.url.default);

        let template = self.url.providers.get(provider_name).ok_or_else(|| {
            Error::Config(format!("Unknown URL provider: {}", provider_name))
        })?;

        Ok(template
            .replace("{lat}", &lat.to_string())
            .replace("{lng}", &lng.to_string())
            .replace("{zoom}", &self.map.zoom.to_string()))
    }

    /// Get server address as "host:port"
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
