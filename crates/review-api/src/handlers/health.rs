//! Health check handlers
//!
//! Endpoints for liveness and readiness probes.

use axum::{extract::State, http::StatusCode, Json};
use review_service::dto::{HealthResponse, ReadinessResponse};
use tracing::warn;

use crate::state::AppState;

/// Basic health check (liveness probe)
///
/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// Readiness check with storage health
///
/// GET /health/ready
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let db_healthy = match state.service_context().health().ping().await {
        Ok(()) => true,
        Err(e) => {
            warn!(error = %e, "Storage ping failed");
            false
        }
    };

    let response = ReadinessResponse::from_checks(db_healthy);
    let status = if response.is_ready() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(response))
}
