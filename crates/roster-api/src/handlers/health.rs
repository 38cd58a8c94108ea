//! Health check handlers
//!
//! Endpoints for liveness, readiness, and the database probe.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use roster_service::dto::{HealthResponse, ReadinessResponse};
use roster_service::HealthService;

use crate::state::AppState;

/// Basic health check (liveness probe)
///
/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        time: Utc::now(),
    })
}

/// Readiness check with database connectivity
///
/// GET /health/ready
pub async fn readiness_check(State(state): State<AppState>) -> (StatusCode, Json<ReadinessResponse>) {
    let response = HealthService::new(state.service_context()).readiness().await;
    let status = if response.ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(response))
}

/// Database diagnostic
///
/// GET /dbtest
///
/// The failure body carries the driver's code and message.
pub async fn db_test(State(state): State<AppState>) -> Response {
    match HealthService::new(state.service_context()).db_test().await {
        Ok(ok) => Json(ok).into_response(),
        Err(failure) => (StatusCode::INTERNAL_SERVER_ERROR, Json(failure)).into_response(),
    }
}
