//! Error handling utilities for repositories

use roster_core::error::DomainError;
use roster_core::value_objects::{MemberId, NightId};
use sqlx::Error as SqlxError;

/// Foreign key from availability to members
const MEMBER_FK: &str = "availability_member_id_fkey";
/// Foreign key from availability to schedule_nights
const NIGHT_FK: &str = "availability_night_id_fkey";

/// Convert SQLx error to DomainError
///
/// Keeps the SQLSTATE when the failure came from the server so diagnostics
/// can report it.
pub fn map_db_error(e: SqlxError) -> DomainError {
    let code = e
        .as_database_error()
        .and_then(|db_err| db_err.code())
        .map(|c| c.into_owned());

    DomainError::StoreFailure {
        code,
        message: e.to_string(),
    }
}

/// Map an availability write failure, turning a dangling reference into the
/// matching "not found" error
pub fn map_availability_write_error(e: SqlxError, member_id: MemberId, night_id: NightId) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_foreign_key_violation() {
            match db_err.constraint() {
                Some(MEMBER_FK) => return DomainError::MemberNotFound(member_id),
                Some(NIGHT_FK) => return DomainError::NightNotFound(night_id),
                _ => {}
            }
        }
    }
    map_db_error(e)
}

/// Create a "night not found" error
pub fn night_not_found(id: NightId) -> DomainError {
    DomainError::NightNotFound(id)
}
