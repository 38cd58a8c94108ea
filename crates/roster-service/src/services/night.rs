//! Night service
//!
//! The night catalogue: upcoming listings, admin create/delete and counts.

use chrono::{NaiveDate, NaiveTime, Utc};
use roster_core::{NightId, ScheduleNight};
use tracing::{info, instrument};

use crate::dto::{CreateNightRequest, NightDto, NightWithCountsDto};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Night service
pub struct NightService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> NightService<'a> {
    /// Create a new NightService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Nights from today onwards, soonest first
    #[instrument(skip(self))]
    pub async fn list_upcoming(&self) -> ServiceResult<Vec<NightDto>> {
        let nights = self
            .ctx
            .night_repo()
            .list_upcoming(Utc::now().date_naive(), self.ctx.schedule().upcoming_limit)
            .await?;

        Ok(nights.into_iter().map(NightDto::from).collect())
    }

    /// Upcoming nights with counts of recorded responses
    #[instrument(skip(self))]
    pub async fn list_with_counts(&self) -> ServiceResult<Vec<NightWithCountsDto>> {
        let rows = self
            .ctx
            .night_repo()
            .list_with_counts(Utc::now().date_naive(), self.ctx.schedule().counts_limit)
            .await?;

        Ok(rows.into_iter().map(NightWithCountsDto::from).collect())
    }

    /// Create a night
    #[instrument(skip(self, request))]
    pub async fn create(&self, request: CreateNightRequest) -> ServiceResult<NightDto> {
        let night_date = parse_date("night_date", &request.night_date)?;
        let start_time = parse_time("start_time", &request.start_time)?;
        let end_time = parse_time("end_time", &request.end_time)?;

        let night = self
            .ctx
            .night_repo()
            .create(&ScheduleNight::new(night_date, start_time, end_time, request.notes))
            .await?;

        info!(night_id = %night.id, night_date = %night.night_date, "Night created");
        Ok(night.into())
    }

    /// Delete a night and its responses
    #[instrument(skip(self))]
    pub async fn delete(&self, night_id: NightId) -> ServiceResult<()> {
        self.ctx.night_repo().delete(night_id).await?;
        info!(night_id = %night_id, "Night deleted");
        Ok(())
    }
}

fn parse_date(field: &'static str, raw: &str) -> ServiceResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| ServiceError::validation(format!("{field} must be YYYY-MM-DD")))
}

/// Accepts `HH:MM:SS` and `HH:MM`
fn parse_time(field: &'static str, raw: &str) -> ServiceResult<NaiveTime> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .map_err(|_| ServiceError::validation(format!("{field} must be HH:MM or HH:MM:SS")))
}
