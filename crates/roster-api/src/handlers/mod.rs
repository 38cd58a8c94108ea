//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod availability;
pub mod health;
pub mod nights;
