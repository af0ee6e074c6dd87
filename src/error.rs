//! Error types for poke-map

use thiserror::Error;

/// Main error type for poke-map operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Geo error: {0}")]
    Geo(String),

    #[error("Seed error: {0}")]
    Seed(String),

    #[error("Point not found: {0}")]
    PointNotFound(String),

    /// Any failure of the three PokeAPI requests
    #[error("Detail fetch failed: {0}")]
    DetailFetch(String),
}

/// Result type alias for poke-map operations
pub type Result<T> = std::result::Result<T, Error>;
