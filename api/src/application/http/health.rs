use axum::{Router, extract::State, routing::get};
use erudite_core::domain::health::ports::HealthCheckService;
use tracing::warn;

use crate::application::http::server::{
    api_entities::{
        api_error::ApiError,
        response::{DataResponse, Response},
    },
    app_state::AppState,
};

pub type HealthResponse = DataResponse<u64>;

/// Reports the store round-trip time; an unreachable store is a 503.
pub async fn health(State(state): State<AppState>) -> Result<Response<HealthResponse>, ApiError> {
    let elapsed = state.service.health().await.map_err(|e| {
        warn!("health check failed: {}", e);
        ApiError::ServiceUnavailable(e.to_string())
    })?;

    Ok(Response::OK(DataResponse::new(
        elapsed,
        "Database responded to ping",
    )))
}

pub fn health_routes(root_path: &str) -> Router<AppState> {
    Router::new().route(&format!("{}/health", root_path), get(health))
}
