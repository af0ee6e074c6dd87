//! Ordered, searchable collection of map points

use crate::detail::{DetailPipeline, ErrorFlag, JsonSource};
use crate::error::{Error, Result};
use crate::point::{Coordinates, Point, SeedRow};
use tracing::{debug, info};

/// Owns every point on the map plus the current selection
#[derive(Debug, Clone, Default)]
pub struct PointCollection {
    points: Vec<Point>,
    /// Index into `points`
    current: Option<usize>,
}

impl PointCollection {
    /// Build the collection, one point per row, numbered from 1 in input order
    ///
    /// Rows are assumed well formed; validation happens where they are loaded.
    pub fn seed<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = SeedRow>,
    {
        let points: Vec<Point> = rows
            .into_iter()
            .enumerate()
            .map(|(index, row)| Point::new(row.name, index + 1, Coordinates::new(row.lat, row.lon)))
            .collect();

        info!("Seeded {} points", points.len());

        Self {
            points,
            current: None,
        }
    }

    /// Show points whose name contains `query`, ignoring case; hide the rest
    ///
    /// An empty query shows everything. Returns the number of visible points.
    pub fn filter(&mut self, query: &str) -> usize {
        let query = query.to_lowercase();
        let mut shown = 0;

        for point in &mut self.points {
            let visible = query.is_empty() || point.name().to_lowercase().contains(&query);
            point.set_visible(visible);
            if visible {
                shown += 1;
            }
        }

        debug!(query = %query, shown, "Filtered points");
        shown
    }

    /// Make `number` the current selection, loading its detail if missing
    ///
    /// Points that already have detail are never fetched again; failed ones
    /// are retried.
    pub async fn select<S: JsonSource>(
        &mut self,
        number: usize,
        pipeline: &DetailPipeline<S>,
    ) -> Result<&Point> {
        let index = self.index_of(number)?;

        if self.mark_selected(number, pipeline.errors())? {
            pipeline.fetch_detail(&mut self.points[index]).await;
        }

        Ok(&self.points[index])
    }

    /// Bookkeeping half of a selection: clear `errors` and set the current point
    ///
    /// Returns whether the point still needs its detail fetched.
    pub fn mark_selected(&mut self, number: usize, errors: &ErrorFlag) -> Result<bool> {
        let index = self.index_of(number)?;

        errors.clear();
        self.current = Some(index);

        let point = &self.points[index];
        if point.has_detail() {
            debug!("{} already has detail", point.label());
            return Ok(false);
        }

        Ok(true)
    }

    /// The currently selected point, if any
    pub fn current(&self) -> Option<&Point> {
        self.current.map(|index| &self.points[index])
    }

    /// All points in seed order
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Points left visible by the last filter
    pub fn visible(&self) -> impl Iterator<Item = &Point> {
        self.points.iter().filter(|p| p.is_visible())
    }

    /// Get point by its 1-based number
    pub fn get(&self, number: usize) -> Option<&Point> {
        number.checked_sub(1).and_then(|index| self.points.get(index))
    }

    pub(crate) fn get_mut(&mut self, number: usize) -> Option<&mut Point> {
        number.checked_sub(1).and_then(|index| self.points.get_mut(index))
    }

    /// Find a point by exact name, ignoring case
    pub fn find_by_name(&self, name: &str) -> Option<&Point> {
        let name = name.to_lowercase();
        self.points.iter().find(|p| p.name().to_lowercase() == name)
    }

    /// Get number of points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the collection is empty
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    fn index_of(&self, number: usize) -> Result<usize> {
        self.get(number)
            .map(|_| number - 1)
            .ok_or_else(|| Error::PointNotFound(format!("#{}", number)))
    }
}
