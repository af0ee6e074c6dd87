//! HTTP API routes
//!
//! Defines all REST API endpoints for the server.

use crate::detail::JsonSource;
use crate::error::Error;
use crate::format::available_formats;
use crate::point::PointView;
use crate::server::state::AppState;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::services::ServeDir;
use tracing::info;

/// Create the API router
pub fn create_router<S: JsonSource + 'static>(state: Arc<AppState<S>>) -> Router {
    // Determine static files path
    // Try relative to cwd first, then next to the executable
    let static_path = if std::path::Path::new("static").exists() {
        "static".to_string()
    } else {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("static")))
            .filter(|path| path.exists())
            .map(|path| path.to_string_lossy().to_string())
            .unwrap_or_else(|| "static".to_string())
    };

    Router::new()
        .route("/api/status", get(status_handler::<S>))
        .route("/api/map", get(map_handler::<S>))
        .route("/api/formats", get(formats_handler))
        .route("/api/points", get(points_handler::<S>))
        .route("/api/points/:number", get(point_handler::<S>))
        .route("/api/points/:number/select", post(select_handler::<S>))
        .nest_service("/", ServeDir::new(&static_path).append_index_html_on_directories(true))
        .with_state(state)
}

/// API error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = if self.code == "NOT_FOUND" {
            StatusCode::NOT_FOUND
        } else {
            StatusCode::BAD_REQUEST
        };
        (status, Json(self)).into_response()
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        let code = match &err {
            Error::PointNotFound(_) => "NOT_FOUND",
            Error::DetailFetch(_) => "DETAIL_FETCH_ERROR",
            Error::Config(_) => "CONFIG_ERROR",
            _ => "INTERNAL_ERROR",
        };
        ApiError {
            error: err.to_string(),
            code: code.to_string(),
        }
    }
}

/// Status response
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Server is running
    pub running: bool,
    /// Server version
    pub version: String,
    /// Number of points on the map
    pub points: usize,
    /// Number of points passing the current filter
    pub visible: usize,
    /// Label of the selected point
    pub current: Option<String>,
    /// The last selection failed to load some detail
    pub error: bool,
}

/// Server status endpoint
///
/// GET /api/status
async fn status_handler<S: JsonSource>(State(state): State<Arc<AppState<S>>>) -> Json<StatusResponse> {
    let points = state.points.read().await;

    Json(StatusResponse {
        running: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
        points: points.len(),
        visible: points.visible().count(),
        current: points.current().map(|p| p.label()),
        error: state.error_raised(),
    })
}

/// Map settings response
#[derive(Debug, Serialize, Deserialize)]
pub struct MapResponse {
    pub center_lat: f64,
    pub center_lng: f64,
    pub zoom: u8,
    pub marker_image: String,
    pub street_view_url: String,
}

/// Map initialization settings
///
/// GET /api/map
async fn map_handler<S: JsonSource>(State(state): State<Arc<AppState<S>>>) -> Json<MapResponse> {
    let map = &state.config.map;

    Json(MapResponse {
        center_lat: map.center_lat,
        center_lng: map.center_lng,
        zoom: map.zoom,
        marker_image: map.marker_image.clone(),
        street_view_url: map.street_view_url.clone(),
    })
}

/// Formats list response
#[derive(Debug, Serialize, Deserialize)]
pub struct FormatsResponse {
    pub formats: Vec<crate::format::FormatInfo>,
}

/// List available output formats
///
/// GET /api/formats
async fn formats_handler() -> Json<FormatsResponse> {
    Json(FormatsResponse {
        formats: available_formats(),
    })
}

/// Points query parameters
#[derive(Debug, Deserialize)]
pub struct PointsQuery {
    /// Search text; applied as the new filter when present
    pub q: Option<String>,
}

/// Points list response
#[derive(Debug, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: Vec<PointView>,
    pub count: usize,
    pub visible: usize,
}

/// List every point, optionally applying a new search filter first
///
/// GET /api/points?q=text
async fn points_handler<S: JsonSource>(
    State(state): State<Arc<AppState<S>>>,
    Query(query): Query<PointsQuery>,
) -> Json<PointsResponse> {
    let mut points = state.points.write().await;

    if let Some(q) = &query.q {
        points.filter(q);
    }

    let views: Vec<PointView> = points.points().iter().map(PointView::from).collect();
    let visible = views.iter().filter(|v| v.visible).count();

    Json(PointsResponse {
        count: views.len(),
        visible,
        points: views,
    })
}

/// Get a single point
///
/// GET /api/points/:number
async fn point_handler<S: JsonSource>(
    State(state): State<Arc<AppState<S>>>,
    Path(number): Path<usize>,
) -> Result<Json<PointView>, ApiError> {
    let points = state.points.read().await;

    points
        .get(number)
        .map(|p| Json(PointView::from(p)))
        .ok_or_else(|| ApiError::from(Error::PointNotFound(format!("#{}", number))))
}

/// Select response
#[derive(Debug, Serialize, Deserialize)]
pub struct SelectResponse {
    pub point: PointView,
    /// Some detail request failed during this selection
    pub error: bool,
}

/// Select a point, loading its detail if missing
///
/// POST /api/points/:number/select
async fn select_handler<S: JsonSource + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(number): Path<usize>,
) -> Result<Json<SelectResponse>, ApiError> {
    let point = state.select(number).await?;
    info!("Selected {}", point.label);

    Ok(Json(SelectResponse {
        point,
        error: state.error_raised(),
    }))
}
