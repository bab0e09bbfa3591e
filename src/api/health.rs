use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: String,
    timestamp: chrono::DateTime<chrono::Utc>,
}

/// GET /health - Health check endpoint
///
/// The planner is stateless and has no external dependencies, so healthy
/// simply means the process is serving requests.
pub async fn health_check() -> impl IntoResponse {
    let response = HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now(),
    };

    (StatusCode::OK, Json(response))
}

/// GET /healthz - Liveness probe
pub async fn liveness_check() -> impl IntoResponse {
    StatusCode::OK
}
