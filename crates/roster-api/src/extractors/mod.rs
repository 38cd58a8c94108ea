//! Axum extractors for request handling
//!
//! Custom extractors for admin authentication, validation, and path ids.

mod admin;
mod path;
mod validated;

pub use admin::AdminAuth;
pub use path::NightIdPath;
pub use validated::{ValidatedJson, ValidatedQuery};
