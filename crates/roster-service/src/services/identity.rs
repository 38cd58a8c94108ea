//! Identity service
//!
//! Maps an email to a stable member, creating it on first sight.

use roster_core::entities::Member;
use roster_core::DomainError;
use tracing::{debug, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Identity service
pub struct IdentityService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> IdentityService<'a> {
    /// Create a new IdentityService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Return the member for `email`, creating it if unseen
    ///
    /// A supplied name replaces the stored one; `None` or a blank name keeps
    /// whatever is stored. Email format is checked by the request DTO; here
    /// it only has to be non-empty.
    #[instrument(skip(self, full_name))]
    pub async fn resolve(&self, email: &str, full_name: Option<String>) -> ServiceResult<Member> {
        if email.trim().is_empty() {
            return Err(DomainError::EmptyEmail.into());
        }

        let full_name = full_name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());

        let member = self
            .ctx
            .member_repo()
            .upsert_by_email(&Member::new(email, full_name))
            .await?;

        debug!(member_id = %member.id, "Member resolved");
        Ok(member)
    }
}
