//! Availability service
//!
//! Handles the toggle write and the two read views over availability rows.

use std::str::FromStr;

use chrono::Utc;
use roster_core::{Availability, AvailabilityStatus, NightId};
use tracing::{info, instrument};

use crate::dto::{
    MyAvailabilityEntry, NightResponseDto, ToggleAvailabilityRequest, ToggleResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::identity::IdentityService;

/// Availability service
pub struct AvailabilityService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AvailabilityService<'a> {
    /// Create a new AvailabilityService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Resolve the caller and record their status for a night
    ///
    /// The status and night id are parsed before the store is touched, so a
    /// malformed request never creates a member.
    #[instrument(skip(self, request), fields(email = %request.email, night_id = %request.night_id))]
    pub async fn toggle(&self, request: ToggleAvailabilityRequest) -> ServiceResult<ToggleResponse> {
        let status = AvailabilityStatus::from_str(&request.status)?;
        let night_id = NightId::parse(&request.night_id)
            .map_err(|_| ServiceError::validation("night_id must be a UUID"))?;

        let member = IdentityService::new(self.ctx)
            .resolve(&request.email, request.full_name)
            .await?;

        let stored = self
            .ctx
            .availability_repo()
            .upsert_status(&Availability::new(member.id, night_id, status))
            .await?;

        info!(
            member_id = %stored.member_id,
            night_id = %stored.night_id,
            status = %stored.status,
            "Availability recorded"
        );

        Ok(ToggleResponse {
            ok: true,
            availability: stored.into(),
        })
    }

    /// Upcoming nights with the caller's status, untoggled nights reading as
    /// unavailable
    ///
    /// Resolves (and so may create) the member first.
    #[instrument(skip(self))]
    pub async fn my_availability(&self, email: &str) -> ServiceResult<Vec<MyAvailabilityEntry>> {
        let member = IdentityService::new(self.ctx).resolve(email, None).await?;

        let rows = self
            .ctx
            .availability_repo()
            .for_member(
                member.id,
                Utc::now().date_naive(),
                self.ctx.schedule().upcoming_limit,
            )
            .await?;

        Ok(rows.into_iter().map(MyAvailabilityEntry::from).collect())
    }

    /// Recorded responses for a night in roster order
    #[instrument(skip(self))]
    pub async fn night_responses(&self, night_id: NightId) -> ServiceResult<Vec<NightResponseDto>> {
        let rows = self.ctx.availability_repo().for_night(night_id).await?;
        Ok(rows.into_iter().map(NightResponseDto::from).collect())
    }
}
