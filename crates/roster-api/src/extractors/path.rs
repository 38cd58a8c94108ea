//! Path parameter extractors
//!
//! Type-safe extraction of night ids from path parameters.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use roster_core::NightId;

use crate::response::ApiError;

/// A single `:id` / `:nightId` path segment parsed as a [`NightId`]
#[derive(Debug, Clone, Copy)]
pub struct NightIdPath(pub NightId);

#[async_trait]
impl<S> FromRequestParts<S> for NightIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.to_string()))?;

        NightId::parse(&raw)
            .map(NightIdPath)
            .map_err(|_| ApiError::invalid_path("Invalid night id format"))
    }
}
