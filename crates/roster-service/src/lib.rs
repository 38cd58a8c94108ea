//! # roster-service
//!
//! Application layer containing the roster use cases, services, and DTOs.
//!
//! Services borrow a [`ServiceContext`] holding the repository ports, so the
//! same code runs against PostgreSQL in production and in-memory fakes in
//! tests.

pub mod dto;
pub mod services;

pub use services::{
    AvailabilityService, HealthService, IdentityService, NightService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult,
};
