//! Map points and their lazily loaded detail
//!
//! This module handles:
//! - The `Point` entity and its derived `has_detail` flag
//! - The ordered, filterable `PointCollection`
//! - Seed sources (embedded table, place search)

pub mod collection;
pub mod seed;

pub use collection::PointCollection;

use crate::constants::pokeapi::MAX_STAT;
use serde::{Deserialize, Serialize};

/// A geographic coordinate (latitude, longitude)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Create new coordinates
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Validate that coordinates are within valid ranges
    ///
    /// Latitude: -90 to 90
    /// Longitude: -180 to 180
    pub fn validate(&self) -> crate::error::Result<()> {
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(crate::error::Error::Seed(format!(
                "Latitude {} is out of range [-90, 90]",
                self.lat
            )));
        }
        if !(-180.0..=180.0).contains(&self.lng) {
            return Err(crate::error::Error::Seed(format!(
                "Longitude {} is out of range [-180, 180]",
                self.lng
            )));
        }
        Ok(())
    }
}

/// One row of seed input: a name and where to put it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedRow {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

impl SeedRow {
    pub fn new(name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            name: name.into(),
            lat,
            lon,
        }
    }
}

/// A single labelled base stat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    /// Short label (HP, Atk, Def, SpA, SpD, Spe)
    pub name: String,
    pub value: u32,
}

impl Stat {
    pub fn new(name: impl Into<String>, value: u32) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Share of the largest possible stat, in percent (stat bar width)
    pub fn percentage(&self) -> f64 {
        f64::from(self.value) / MAX_STAT * 100.0
    }
}

/// Progress of the detail fetch for one point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchState {
    /// Nothing requested yet
    #[default]
    Idle,
    /// Waiting on the entity record
    PendingLookup,
    /// Record in hand, waiting on image and description
    PendingDetails,
    /// Every request succeeded
    Done,
    /// At least one request failed
    Failed,
}

/// A map point with lazily populated detail fields
#[derive(Debug, Clone)]
pub struct Point {
    name: String,
    number: usize,
    coords: Coordinates,
    visible: bool,
    stats: Vec<Stat>,
    image_url: String,
    description: String,
    fetch_state: FetchState,
}

impl Point {
    /// Create a point with empty detail
    pub fn new(name: impl Into<String>, number: usize, coords: Coordinates) -> Self {
        Self {
            name: name.into(),
            number,
            coords,
            visible: true,
            stats: Vec::new(),
            image_url: String::new(),
            description: String::new(),
            fetch_state: FetchState::Idle,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// 1-based position in the collection
    pub fn number(&self) -> usize {
        self.number
    }

    pub fn coords(&self) -> Coordinates {
        self.coords
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn stats(&self) -> &[Stat] {
        &self.stats
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn fetch_state(&self) -> FetchState {
        self.fetch_state
    }

    /// True once both stats and image are in place
    ///
    /// The description is not part of this check, so a point can count as
    /// loaded while its description is still blank.
    pub fn has_detail(&self) -> bool {
        !self.stats.is_empty() && !self.image_url.is_empty()
    }

    /// Number and name, e.g. "007 Squirtle"
    pub fn label(&self) -> String {
        format!("{} {}", format_number(self.number), self.name)
    }

    /// Street view image for this point's location
    pub fn street_view_url(&self, prefix: &str) -> String {
        format!("{}{},{}", prefix, self.coords.lat, self.coords.lng)
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub(crate) fn set_stats(&mut self, stats: Vec<Stat>) {
        self.stats = stats;
    }

    pub(crate) fn set_image_url(&mut self, url: impl Into<String>) {
        self.image_url = url.into();
    }

    pub(crate) fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub(crate) fn set_fetch_state(&mut self, state: FetchState) {
        self.fetch_state = state;
    }
}

/// Zero-pad to three digits; larger numbers are left alone
pub fn format_number(number: usize) -> String {
    format!("{:03}", number)
}

/// Serializable snapshot of a point, as handed to the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointView {
    pub number: usize,
    pub name: String,
    pub label: String,
    pub lat: f64,
    pub lng: f64,
    pub visible: bool,
    pub has_detail: bool,
    pub fetch_state: FetchState,
    pub stats: Vec<Stat>,
    pub image_url: String,
    pub description: String,
}

impl From<&Point> for PointView {
    fn from(point: &Point) -> Self {
        Self {
            number: point.number,
            name: point.name.clone(),
            label: point.label(),
            lat: point.coords.lat,
            lng: point.coords.lng,
            visible: point.visible,
            has_detail: point.has_detail(),
            fetch_state: point.fetch_state,
            stats: point.stats.clone(),
            image_url: point.image_url.clone(),
            description: point.description.clone(),
        }
    }
}
