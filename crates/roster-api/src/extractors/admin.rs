//! Admin authentication extractor
//!
//! Checks `Authorization: Bearer <token>` against the configured admin
//! secret. Handlers that take [`AdminAuth`] never run for a rejected request.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts},
};
use roster_common::AppError;

use crate::response::ApiError;
use crate::state::AppState;

/// Proof that the request carried the admin token
#[derive(Debug, Clone, Copy)]
pub struct AdminAuth;

#[async_trait]
impl<S> FromRequestParts<S> for AdminAuth
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok());

        let app_state = AppState::from_ref(state);
        app_state.admin_token().verify_header(header).map_err(|reason| {
            tracing::warn!(reason = %reason, "Admin request rejected");
            ApiError::App(AppError::Unauthorized(reason))
        })?;

        Ok(AdminAuth)
    }
}
