//! Integration test utilities for the night roster API
//!
//! This crate provides helpers for running end-to-end tests against
//! the REST API.


pub use fixtures::*;
pub use helpers::*;
