//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Every write here is a single conditional
//! statement in the store; implementations must not emulate an upsert with a
//! read followed by a write.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

use crate::entities::{
    Availability, Member, MemberNightStatus, NightResponse, NightWithCounts, ScheduleNight,
};
use crate::error::DomainError;
use crate::value_objects::{MemberId, NightId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Member Repository
// ============================================================================

#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Insert `candidate` if its email is unseen, otherwise merge its name
    /// into the stored row (`COALESCE(new, stored)`).
    ///
    /// Returns the stored member; for an existing email that is the original
    /// id, not `candidate.id`.
    async fn upsert_by_email(&self, candidate: &Member) -> RepoResult<Member>;
}

// ============================================================================
// Night Repository
// ============================================================================

#[async_trait]
pub trait NightRepository: Send + Sync {
    /// Nights with `night_date >= from`, ascending by date
    async fn list_upcoming(&self, from: NaiveDate, limit: i64) -> RepoResult<Vec<ScheduleNight>>;

    /// Upcoming nights with counts of recorded responses per status
    async fn list_with_counts(
        &self,
        from: NaiveDate,
        limit: i64,
    ) -> RepoResult<Vec<NightWithCounts>>;

    /// Insert a new night
    async fn create(&self, night: &ScheduleNight) -> RepoResult<ScheduleNight>;

    /// Delete a night and, by cascade, its responses
    async fn delete(&self, id: NightId) -> RepoResult<()>;
}

// ============================================================================
// Availability Repository
// ============================================================================

#[async_trait]
pub trait AvailabilityRepository: Send + Sync {
    /// Insert or overwrite the row for `(candidate.member_id, candidate.night_id)`
    /// and refresh its timestamp. Returns the post-write row.
    async fn upsert_status(&self, candidate: &Availability) -> RepoResult<Availability>;

    /// Upcoming nights left-joined with the member's responses; missing rows
    /// read as unavailable
    async fn for_member(
        &self,
        member_id: MemberId,
        from: NaiveDate,
        limit: i64,
    ) -> RepoResult<Vec<MemberNightStatus>>;

    /// Recorded responses for a night in roster order
    async fn for_night(&self, night_id: NightId) -> RepoResult<Vec<NightResponse>>;
}

// ============================================================================
// Store Probe
// ============================================================================

#[async_trait]
pub trait StoreProbe: Send + Sync {
    /// Round trip to the store returning its clock
    async fn server_time(&self) -> RepoResult<DateTime<Utc>>;

    /// Whether a connection can be acquired
    async fn is_ready(&self) -> bool {
        self.server_time().await.is_ok()
    }
}
