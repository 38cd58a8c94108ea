//! Availability database models

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the availability table
#[derive(Debug, Clone, FromRow)]
pub struct AvailabilityModel {
    pub id: Uuid,
    pub member_id: Uuid,
    pub night_id: Uuid,
    pub status: String,
    pub updated_at: DateTime<Utc>,
}

/// Night left-joined with one member's response (status already defaulted)
#[derive(Debug, Clone, FromRow)]
pub struct MemberNightStatusModel {
    pub night_id: Uuid,
    pub night_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub notes: Option<String>,
    pub status: String,
}

/// Recorded response joined with its member
#[derive(Debug, Clone, FromRow)]
pub struct NightResponseModel {
    pub availability_id: Uuid,
    pub status: String,
    pub updated_at: DateTime<Utc>,
    pub member_id: Uuid,
    pub email: String,
    pub full_name: Option<String>,
    pub is_admin: bool,
}
