//! Route definitions
//!
//! Member and admin routes share one router; health routes are exported
//! separately so they bypass rate limiting.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{availability, health, nights};
use crate::state::AppState;

/// Create the main API router (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(member_routes())
        .merge(admin_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/dbtest", get(health::db_test))
}

/// Open routes keyed by the caller's email
fn member_routes() -> Router<AppState> {
    Router::new()
        .route("/my-availability", get(availability::my_availability))
        .route("/availability/toggle", post(availability::toggle_availability))
        .route("/availability/:night_id", get(availability::night_availability))
}

/// Night catalogue; every handler except the listing requires `AdminAuth`
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/nights", get(nights::list_nights).post(nights::create_night))
        .route("/nights/:id", axum::routing::delete(nights::delete_night))
        .route("/nights/:id/availability", get(nights::night_availability))
        .route("/nights-with-counts", get(nights::nights_with_counts))
}
