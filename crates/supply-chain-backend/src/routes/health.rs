//! Health check endpoint.

use axum::Json;
use serde::Serialize;

/// Status string reported while the process is accepting connections.
pub const STATUS_RUNNING: &str = "Supply Chain Backend is running";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// GET /health: returns system health status.
pub async fn check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: STATUS_RUNNING,
    })
}
