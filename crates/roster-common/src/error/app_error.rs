//! Application error types
//!
//! Errors raised outside the domain: admin credentials, startup wiring and
//! the database connection. Domain errors travel as `ServiceError`.

use crate::auth::AdminTokenError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The reason is kept for logs; clients only see "Unauthorized"
    #[error("Unauthorized")]
    Unauthorized(#[source] AdminTokenError),

    /// Pool creation or migration failure
    #[error("Database error: {0}")]
    Database(String),

    /// Bad configuration or a server that cannot bind
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Unauthorized(_) => 401,
            Self::Database(_) | Self::Config(_) => 500,
        }
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
        }
    }
}

impl From<AdminTokenError> for AppError {
    fn from(err: AdminTokenError) -> Self {
        Self::Unauthorized(err)
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
