//! Availability entity - one member's response for one night
//!
//! A (member, night) pair moves through three states:
//!
//! ```text
//! unrecorded --first toggle--> available | unavailable
//! available  <----toggle---->  unavailable
//! ```
//!
//! There is no transition back to unrecorded. An unrecorded pair is read as
//! [`AvailabilityStatus::Unavailable`] but no row exists for it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::entities::{Member, ScheduleNight};
use crate::error::DomainError;
use crate::value_objects::{AvailabilityId, MemberId, NightId};

/// Recorded response value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityStatus {
    Available,
    /// Also the projection for pairs that were never toggled
    #[default]
    Unavailable,
}

impl AvailabilityStatus {
    /// Storage / wire representation
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Unavailable => "unavailable",
        }
    }
}

impl fmt::Display for AvailabilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AvailabilityStatus {
    type Err = DomainError;

    /// Exact match only: `"Available"` or `" available"` are rejected
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(Self::Available),
            "unavailable" => Ok(Self::Unavailable),
            other => Err(DomainError::InvalidStatus(other.to_string())),
        }
    }
}

/// Stored availability row for a (member, night) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Availability {
    pub id: AvailabilityId,
    pub member_id: MemberId,
    pub night_id: NightId,
    pub status: AvailabilityStatus,
    pub updated_at: DateTime<Utc>,
}

impl Availability {
    /// Create a candidate row for an upsert
    pub fn new(member_id: MemberId, night_id: NightId, status: AvailabilityStatus) -> Self {
        Self {
            id: AvailabilityId::generate(),
            member_id,
            night_id,
            status,
            updated_at: Utc::now(),
        }
    }
}

/// A night as seen by one member, with the defaulted status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberNightStatus {
    pub night: ScheduleNight,
    pub status: AvailabilityStatus,
}

/// One recorded response for a night
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NightResponse {
    pub availability_id: AvailabilityId,
    pub member: Member,
    pub status: AvailabilityStatus,
    pub updated_at: DateTime<Utc>,
}
