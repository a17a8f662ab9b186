//! HTTP API surface
//!
//! Thin dispatch onto cache reads; all forecast work happens in the refresh
//! pipeline. Routes mirror what the mobile client consumes:
//! `/api/beaches`, `/api/beach/{slug}`, and `/api/weather/{slug}`.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};

use crate::cache::ForecastCache;
use crate::data::{BeachSummary, SurfSnapshot, WeatherSnapshot};

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<ForecastCache>,
}

/// Client-visible API errors
///
/// An unknown slug and a configured beach the cache has not warmed yet both
/// surface as not-found; neither is a system fault.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Beach '{0}' not found")]
    NotFound(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": self.to_string() })),
            )
                .into_response(),
        }
    }
}

/// Builds the API router with a permissive CORS layer
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/beaches", get(list_beaches))
        .route("/api/beach/{slug}", get(beach_surf))
        .route("/api/weather/{slug}", get(beach_weather))
        .layer(cors)
        .with_state(state)
}

/// Binds the listener and serves the API until shutdown
pub async fn run(port: u16, state: AppState) -> anyhow::Result<()> {
    let app = router(state);
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}

async fn list_beaches(State(state): State<AppState>) -> Json<Vec<BeachSummary>> {
    Json(state.cache.summaries())
}

async fn beach_surf(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<SurfSnapshot>, ApiError> {
    match state.cache.get(&slug) {
        Some(report) => Ok(Json(report.surf.clone())),
        None => Err(ApiError::NotFound(slug)),
    }
}

async fn beach_weather(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<WeatherSnapshot>, ApiError> {
    match state.cache.get(&slug) {
        Some(report) => Ok(Json(report.weather.clone())),
        None => Err(ApiError::NotFound(slug)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error_message() {
        let err = ApiError::NotFound("atlantis".to_string());
        assert_eq!(err.to_string(), "Beach 'atlantis' not found");
    }
}
