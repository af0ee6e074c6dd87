//! Server shared state
//!
//! Holds configuration, the point collection and the detail pipeline.

use crate::config::Config;
use crate::detail::{DetailPipeline, DetailTarget, DetailUpdate, HttpJsonSource, JsonSource};
use crate::error::{Error, Result};
use crate::point::{PointCollection, PointView};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Shared state for the HTTP server
pub struct AppState<S = HttpJsonSource> {
    /// Configuration
    pub config: Config,

    /// Every point on the map. Locked only for bookkeeping and single field
    /// writes, never across a PokeAPI request.
    pub points: Arc<RwLock<PointCollection>>,

    /// Detail fetcher and its shared error flag
    pub pipeline: DetailPipeline<S>,
}

impl AppState<HttpJsonSource> {
    /// Create state that fetches detail from the configured PokeAPI host
    pub fn new(config: Config, points: PointCollection) -> Result<Self> {
        let pipeline = DetailPipeline::new(HttpJsonSource::new()?, config.api.pokeapi_url.clone());
        Ok(Self::with_pipeline(config, points, pipeline))
    }
}

impl<S: JsonSource> AppState<S> {
    /// Create state around an existing pipeline
    pub fn with_pipeline(config: Config, points: PointCollection, pipeline: DetailPipeline<S>) -> Self {
        Self {
            config,
            points: Arc::new(RwLock::new(points)),
            pipeline,
        }
    }

    /// Whether the last selection hit a fetch failure
    pub fn error_raised(&self) -> bool {
        self.pipeline.errors().is_raised()
    }
}

impl<S: JsonSource + 'static> AppState<S> {
    /// Select `number`, loading its detail if missing
    ///
    /// The fetch runs in its own task, so it keeps going and still writes its
    /// results if the caller goes away. Returns the point as it stands once
    /// the fetch has finished.
    pub async fn select(self: &Arc<Self>, number: usize) -> Result<PointView> {
        let pending = {
            let mut points = self.points.write().await;
            if points.mark_selected(number, self.pipeline.errors())? {
                points.get(number).map(|p| (p.name().to_string(), p.label()))
            } else {
                None
            }
        };

        if let Some((name, label)) = pending {
            let state = Arc::clone(self);
            let task = tokio::spawn(async move {
                let mut target = SharedPoint::new(Arc::clone(&state.points), number);
                state.pipeline.fetch_into(&name, &label, &mut target).await
            });

            let outcome = task
                .await
                .map_err(|e| Error::Server(format!("Detail fetch task failed: {}", e)))?;
            debug!("Fetch for #{} finished: {:?}", number, outcome);
        }

        let points = self.points.read().await;
        points
            .get(number)
            .map(PointView::from)
            .ok_or_else(|| Error::PointNotFound(format!("#{}", number)))
    }
}

/// One point inside the shared collection
///
/// Each update takes the write lock just long enough to set one field.
pub struct SharedPoint {
    points: Arc<RwLock<PointCollection>>,
    number: usize,
}

impl SharedPoint {
    pub fn new(points: Arc<RwLock<PointCollection>>, number: usize) -> Self {
        Self { points, number }
    }
}

impl DetailTarget for SharedPoint {
    async fn apply(&mut self, update: DetailUpdate) {
        let mut points = self.points.write().await;
        if let Some(point) = points.get_mut(self.number) {
            update.apply_to(point);
        }
    }
}
