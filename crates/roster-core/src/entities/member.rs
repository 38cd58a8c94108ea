//! Member entity - a participant identified by email address

use crate::value_objects::MemberId;

/// Member entity
///
/// Until stronger authentication exists a member is identified solely by
/// `email`, which is unique and compared case-sensitively as stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub id: MemberId,
    pub email: String,
    pub full_name: Option<String>,
    pub is_admin: bool,
}

impl Member {
    /// Create a candidate member with a freshly generated id
    ///
    /// The id only survives if the email has never been seen; an upsert on an
    /// existing email returns the stored id instead.
    pub fn new(email: impl Into<String>, full_name: Option<String>) -> Self {
        Self {
            id: MemberId::generate(),
            email: email.into(),
            full_name,
            is_admin: false,
        }
    }
}
