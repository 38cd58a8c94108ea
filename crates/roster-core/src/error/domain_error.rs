//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{MemberId, NightId};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Member not found: {0}")]
    MemberNotFound(MemberId),

    #[error("Night not found: {0}")]
    NightNotFound(NightId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid status '{0}': expected 'available' or 'unavailable'")]
    InvalidStatus(String),

    #[error("Email is required")]
    EmptyEmail,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    /// Any persistence failure: connectivity, constraint violation, timeout.
    /// `code` carries the driver's SQLSTATE when there is one.
    #[error("Storage failure: {message}")]
    StoreFailure {
        code: Option<String>,
        message: String,
    },
}

impl DomainError {
    /// Create a storage failure without a driver code
    pub fn store(message: impl Into<String>) -> Self {
        Self::StoreFailure {
            code: None,
            message: message.into(),
        }
    }

    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::MemberNotFound(_) => "UNKNOWN_MEMBER",
            Self::NightNotFound(_) => "UNKNOWN_NIGHT",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidStatus(_) => "INVALID_STATUS",
            Self::EmptyEmail => "EMAIL_REQUIRED",
            Self::StoreFailure { .. } => "DATABASE_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::MemberNotFound(_) | Self::NightNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::InvalidStatus(_) | Self::EmptyEmail
        )
    }

    /// Check if this is a persistence failure
    pub fn is_store_failure(&self) -> bool {
        matches!(self, Self::StoreFailure { .. })
    }
}
