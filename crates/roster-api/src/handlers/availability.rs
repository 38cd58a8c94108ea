//! Availability handlers
//!
//! Member-facing endpoints. Identity is the email in the request.

use axum::{extract::State, Json};
use roster_service::dto::{
    MyAvailabilityEntry, MyAvailabilityQuery, NightResponseDto, ToggleAvailabilityRequest,
    ToggleResponse,
};
use roster_service::AvailabilityService;

use crate::extractors::{NightIdPath, ValidatedJson, ValidatedQuery};
use crate::response::ApiResult;
use crate::state::AppState;

/// Record the caller's status for a night
///
/// POST /availability/toggle
pub async fn toggle_availability(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ToggleAvailabilityRequest>,
) -> ApiResult<Json<ToggleResponse>> {
    let service = AvailabilityService::new(state.service_context());
    let response = service.toggle(request).await?;
    Ok(Json(response))
}

/// Upcoming nights with the caller's status
///
/// GET /my-availability?email=
pub async fn my_availability(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<MyAvailabilityQuery>,
) -> ApiResult<Json<Vec<MyAvailabilityEntry>>> {
    let service = AvailabilityService::new(state.service_context());
    let response = service.my_availability(&query.email).await?;
    Ok(Json(response))
}

/// Recorded responses for a night
///
/// GET /availability/{night_id}
pub async fn night_availability(
    State(state): State<AppState>,
    NightIdPath(night_id): NightIdPath,
) -> ApiResult<Json<Vec<NightResponseDto>>> {
    let service = AvailabilityService::new(state.service_context());
    let response = service.night_responses(night_id).await?;
    Ok(Json(response))
}
