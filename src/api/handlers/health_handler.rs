//! Health check handlers.

use axum::{response::Json, routing::get, Router};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::AppState;

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: String,
}

/// Create health routes.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

/// Liveness check. The service has no dependencies, so it is
/// healthy whenever it can answer.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}
