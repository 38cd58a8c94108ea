//! Admin authentication
//!
//! A shared bearer secret compared by exact match. This is a placeholder
//! mechanism, not an account system.

mod admin_token;

pub use admin_token::{AdminToken, AdminTokenError};
