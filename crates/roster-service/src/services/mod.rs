//! Business logic services
//!
//! This module contains the service layer implementations that validate
//! input and orchestrate the repository ports.

pub mod availability;
pub mod context;
pub mod error;
pub mod health;
pub mod identity;
pub mod night;

#[cfg(test)]
pub(crate) mod fakes;

// Re-export all services for convenience
pub use availability::AvailabilityService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use health::HealthService;
pub use identity::IdentityService;
pub use night::NightService;
