//! poke-map: a searchable map of Pokemon locations
//!
//! A library and CLI tool that seeds map points from an embedded table (or a
//! live place search), filters them by name and lazily loads each point's
//! PokeAPI detail the first time it is selected.
//!
//! ## Features
//!
//! - Case-insensitive substring filter over point names
//! - Detail pipeline: lookup, sprite and description requests
//! - One shared error flag for every fetch failure
//! - HTTP API + CLI interface
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use poke_map::point::seed::static_rows;
//! use poke_map::{DetailPipeline, HttpJsonSource, PointCollection};
//!
//! # async fn demo() -> poke_map::Result<()> {
//! let mut points = PointCollection::seed(static_rows()?);
//!
//! // Narrow the map down
//! let visible = points.filter("saur");
//! println!("{} points match", visible);
//!
//! // Select one and load its detail
//! let pipeline = DetailPipeline::new(HttpJsonSource::new()?, "http://pokeapi.co");
//! let point = points.select(1, &pipeline).await?;
//! println!("{}: {}", point.label(), point.description());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod detail;
pub mod error;
pub mod format;
pub mod geo;
pub mod point;
pub mod server;

// Re-export commonly used types
pub use config::Config;
pub use detail::{DetailPipeline, HttpJsonSource, JsonSource};
pub use error::{Error, Result};
pub use point::{Coordinates, FetchState, Point, PointCollection};
