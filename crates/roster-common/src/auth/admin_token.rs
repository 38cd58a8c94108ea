//! Admin bearer token

use std::fmt;

/// Why an admin credential was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AdminTokenError {
    #[error("Admin token is not configured")]
    NotConfigured,

    #[error("Missing admin token")]
    Missing,

    #[error("Admin token mismatch")]
    Mismatch,
}

/// Server-held admin secret
///
/// Surrounding whitespace is ignored on both the configured and the presented
/// value; otherwise the comparison is exact. An empty or absent secret
/// rejects every request.
#[derive(Clone, Default)]
pub struct AdminToken {
    secret: Option<String>,
}

impl AdminToken {
    /// Create from the raw configured value
    pub fn new(secret: Option<String>) -> Self {
        Self {
            secret: secret
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }

    /// Whether a secret is configured
    pub fn is_configured(&self) -> bool {
        self.secret.is_some()
    }

    /// Check a presented token
    pub fn verify(&self, presented: &str) -> Result<(), AdminTokenError> {
        let secret = self.secret.as_deref().ok_or(AdminTokenError::NotConfigured)?;
        let presented = presented.trim();

        if presented.is_empty() {
            return Err(AdminTokenError::Missing);
        }
        if presented != secret {
            return Err(AdminTokenError::Mismatch);
        }
        Ok(())
    }

    /// Check a raw `Authorization` header value
    ///
    /// The `Bearer` scheme is matched case-insensitively.
    pub fn verify_header(&self, header: Option<&str>) -> Result<(), AdminTokenError> {
        let token = header
            .and_then(bearer_token)
            .ok_or(AdminTokenError::Missing)?;
        self.verify(token)
    }
}

/// Extract the credential from a `Bearer <token>` header value
fn bearer_token(header: &str) -> Option<&str> {
    let (scheme, token) = header.trim_start().split_once(' ')?;
    scheme.eq_ignore_ascii_case("bearer").then_some(token)
}

impl fmt::Debug for AdminToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminToken")
            .field("configured", &self.is_configured())
            .finish()
    }
}
