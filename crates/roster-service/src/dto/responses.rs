//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Listing endpoints
//! return bare JSON arrays of these rows.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use roster_core::AvailabilityStatus;

// ============================================================================
// Common Response Types
// ============================================================================

/// `{ "ok": true }`
#[derive(Debug, Serialize)]
pub struct OkResponse {
    pub ok: bool,
}

impl OkResponse {
    pub fn new() -> Self {
        Self { ok: true }
    }
}

impl Default for OkResponse {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Night Responses
// ============================================================================

/// A scheduled night
#[derive(Debug, Serialize)]
pub struct NightDto {
    pub id: Uuid,
    pub night_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub notes: Option<String>,
}

/// A night with recorded response counts
#[derive(Debug, Serialize)]
pub struct NightWithCountsDto {
    pub id: Uuid,
    pub night_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub notes: Option<String>,
    pub available_count: i64,
    pub unavailable_count: i64,
}

// ============================================================================
// Availability Responses
// ============================================================================

/// A stored availability row
#[derive(Debug, Serialize)]
pub struct AvailabilityDto {
    pub id: Uuid,
    pub member_id: Uuid,
    pub night_id: Uuid,
    pub status: AvailabilityStatus,
    pub updated_at: DateTime<Utc>,
}

/// `{ "ok": true, "availability": {...} }`
#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    pub ok: bool,
    pub availability: AvailabilityDto,
}

/// One upcoming night from a member's point of view
#[derive(Debug, Serialize)]
pub struct MyAvailabilityEntry {
    pub night_id: Uuid,
    pub night_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub notes: Option<String>,
    pub status: AvailabilityStatus,
}

/// One recorded response for a night
#[derive(Debug, Serialize)]
pub struct NightResponseDto {
    /// Availability row id
    pub id: Uuid,
    pub status: AvailabilityStatus,
    pub updated_at: DateTime<Utc>,
    pub member_id: Uuid,
    pub email: String,
    pub full_name: Option<String>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub time: DateTime<Utc>,
}

/// Readiness
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub database: bool,
}

/// Successful database probe
#[derive(Debug, Serialize)]
pub struct DbTestResponse {
    pub ok: bool,
    pub server_time: DateTime<Utc>,
}

/// Failed database probe, with the driver's code and message
#[derive(Debug, Serialize)]
pub struct DbTestFailure {
    pub ok: bool,
    pub code: Option<String>,
    pub message: String,
}
