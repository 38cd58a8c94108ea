//! Service context - dependency container for services
//!
//! Holds the repository ports and display settings needed by services.

use std::sync::Arc;

use roster_common::ScheduleConfig;
use roster_core::traits::{AvailabilityRepository, MemberRepository, NightRepository, StoreProbe};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Cheap to clone; every dependency sits behind an `Arc`.
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    member_repo: Arc<dyn MemberRepository>,
    night_repo: Arc<dyn NightRepository>,
    availability_repo: Arc<dyn AvailabilityRepository>,

    // Connectivity
    store_probe: Arc<dyn StoreProbe>,

    // Settings
    schedule: ScheduleConfig,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        member_repo: Arc<dyn MemberRepository>,
        night_repo: Arc<dyn NightRepository>,
        availability_repo: Arc<dyn AvailabilityRepository>,
        store_probe: Arc<dyn StoreProbe>,
        schedule: ScheduleConfig,
    ) -> Self {
        Self {
            member_repo,
            night_repo,
            availability_repo,
            store_probe,
            schedule,
        }
    }

    // === Repositories ===

    /// Get the member repository
    pub fn member_repo(&self) -> &dyn MemberRepository {
        self.member_repo.as_ref()
    }

    /// Get the night repository
    pub fn night_repo(&self) -> &dyn NightRepository {
        self.night_repo.as_ref()
    }

    /// Get the availability repository
    pub fn availability_repo(&self) -> &dyn AvailabilityRepository {
        self.availability_repo.as_ref()
    }

    /// Get the store probe
    pub fn store_probe(&self) -> &dyn StoreProbe {
        self.store_probe.as_ref()
    }

    // === Settings ===

    /// Get the listing windows
    pub fn schedule(&self) -> ScheduleConfig {
        self.schedule
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("schedule", &self.schedule)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    member_repo: Option<Arc<dyn MemberRepository>>,
    night_repo: Option<Arc<dyn NightRepository>>,
    availability_repo: Option<Arc<dyn AvailabilityRepository>>,
    store_probe: Option<Arc<dyn StoreProbe>>,
    schedule: Option<ScheduleConfig>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn member_repo(mut self, repo: Arc<dyn MemberRepository>) -> Self {
        self.member_repo = Some(repo);
        self
    }

    pub fn night_repo(mut self, repo: Arc<dyn NightRepository>) -> Self {
        self.night_repo = Some(repo);
        self
    }

    pub fn availability_repo(mut self, repo: Arc<dyn AvailabilityRepository>) -> Self {
        self.availability_repo = Some(repo);
        self
    }

    pub fn store_probe(mut self, probe: Arc<dyn StoreProbe>) -> Self {
        self.store_probe = Some(probe);
        self
    }

    pub fn schedule(mut self, schedule: ScheduleConfig) -> Self {
        self.schedule = Some(schedule);
        self
    }

    /// Build the ServiceContext
    ///
    /// The schedule falls back to its defaults when not set.
    ///
    /// # Errors
    /// Returns `ServiceError::Internal` if any repository is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.member_repo
                .ok_or_else(|| ServiceError::internal("member_repo is required"))?,
            self.night_repo
                .ok_or_else(|| ServiceError::internal("night_repo is required"))?,
            self.availability_repo
                .ok_or_else(|| ServiceError::internal("availability_repo is required"))?,
            self.store_probe
                .ok_or_else(|| ServiceError::internal("store_probe is required"))?,
            self.schedule.unwrap_or_default(),
        ))
    }
}
