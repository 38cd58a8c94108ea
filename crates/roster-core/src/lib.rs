//! # roster-core
//!
//! Domain layer for the night roster: members, schedule nights, availability
//! records and the repository ports the storage layer implements.
//! This crate has no dependency on the database or the web framework.

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Availability, AvailabilityStatus, Member, MemberNightStatus, NightResponse, NightWithCounts,
    ScheduleNight,
};
pub use error::DomainError;
pub use traits::{
    AvailabilityRepository, MemberRepository, NightRepository, RepoResult, StoreProbe,
};
pub use value_objects::{AvailabilityId, IdParseError, MemberId, NightId};
