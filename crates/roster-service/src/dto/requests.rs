//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Field formats that need parsing (ids, statuses, dates, times) arrive as
//! strings and are parsed by the services so the error names the field.

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Availability Requests
// ============================================================================

/// Toggle request: `{ email, full_name?, night_id, status }`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ToggleAvailabilityRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(max = 200, message = "Full name must be at most 200 characters"))]
    pub full_name: Option<String>,

    #[validate(length(min = 1, message = "night_id is required"))]
    pub night_id: String,

    /// `available` or `unavailable`
    pub status: String,
}

/// Query string for `GET /my-availability`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MyAvailabilityQuery {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

// ============================================================================
// Night Requests
// ============================================================================

/// Create night request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateNightRequest {
    /// `YYYY-MM-DD`
    #[validate(length(min = 1, message = "night_date is required"))]
    pub night_date: String,

    /// `HH:MM` or `HH:MM:SS`
    #[validate(length(min = 1, message = "start_time is required"))]
    pub start_time: String,

    #[validate(length(min = 1, message = "end_time is required"))]
    pub end_time: String,

    #[validate(length(max = 1000, message = "Notes must be at most 1000 characters"))]
    pub notes: Option<String>,
}
