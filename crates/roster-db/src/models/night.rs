//! Schedule night database models

use chrono::{NaiveDate, NaiveTime};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the schedule_nights table
#[derive(Debug, Clone, FromRow)]
pub struct NightModel {
    pub id: Uuid,
    pub night_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub notes: Option<String>,
}

/// Night row with aggregated response counts
#[derive(Debug, Clone, FromRow)]
pub struct NightWithCountsModel {
    pub id: Uuid,
    pub night_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub notes: Option<String>,
    pub available_count: i64,
    pub unavailable_count: i64,
}
