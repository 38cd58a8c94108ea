//! Night handlers
//!
//! The public night listing plus the admin catalogue endpoints.

use axum::{extract::State, Json};
use roster_service::dto::{
    CreateNightRequest, NightDto, NightResponseDto, NightWithCountsDto, OkResponse,
};
use roster_service::{AvailabilityService, NightService};

use crate::extractors::{AdminAuth, NightIdPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// List upcoming nights
///
/// GET /nights
pub async fn list_nights(State(state): State<AppState>) -> ApiResult<Json<Vec<NightDto>>> {
    let service = NightService::new(state.service_context());
    let response = service.list_upcoming().await?;
    Ok(Json(response))
}

/// Create a night
///
/// POST /nights
pub async fn create_night(
    State(state): State<AppState>,
    _admin: AdminAuth,
    ValidatedJson(request): ValidatedJson<CreateNightRequest>,
) -> ApiResult<Created<Json<NightDto>>> {
    let service = NightService::new(state.service_context());
    let response = service.create(request).await?;
    Ok(Created(Json(response)))
}

/// Delete a night and its responses
///
/// DELETE /nights/{id}
pub async fn delete_night(
    State(state): State<AppState>,
    _admin: AdminAuth,
    NightIdPath(night_id): NightIdPath,
) -> ApiResult<Json<OkResponse>> {
    let service = NightService::new(state.service_context());
    service.delete(night_id).await?;
    Ok(Json(OkResponse::new()))
}

/// Upcoming nights with response counts
///
/// GET /nights-with-counts
pub async fn nights_with_counts(
    State(state): State<AppState>,
    _admin: AdminAuth,
) -> ApiResult<Json<Vec<NightWithCountsDto>>> {
    let service = NightService::new(state.service_context());
    let response = service.list_with_counts().await?;
    Ok(Json(response))
}

/// Recorded responses for a night (admin view)
///
/// GET /nights/{id}/availability
pub async fn night_availability(
    State(state): State<AppState>,
    _admin: AdminAuth,
    NightIdPath(night_id): NightIdPath,
) -> ApiResult<Json<Vec<NightResponseDto>>> {
    let service = AvailabilityService::new(state.service_context());
    let response = service.night_responses(night_id).await?;
    Ok(Json(response))
}
