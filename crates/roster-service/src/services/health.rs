//! Health service
//!
//! Readiness and the database diagnostic probe.

use roster_core::DomainError;
use tracing::{error, instrument};

use crate::dto::{DbTestFailure, DbTestResponse, ReadinessResponse};

use super::context::ServiceContext;

/// Health service
pub struct HealthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> HealthService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Whether the store answers
    #[instrument(skip(self))]
    pub async fn readiness(&self) -> ReadinessResponse {
        let database = self.ctx.store_probe().is_ready().await;
        ReadinessResponse {
            ready: database,
            database,
        }
    }

    /// Fetch the database clock, or the driver's error code and message
    #[instrument(skip(self))]
    pub async fn db_test(&self) -> Result<DbTestResponse, DbTestFailure> {
        match self.ctx.store_probe().server_time().await {
            Ok(server_time) => Ok(DbTestResponse {
                ok: true,
                server_time,
            }),
            Err(err) => {
                error!(error = %err, "Database probe failed");
                let (code, message) = match err {
                    DomainError::StoreFailure { code, message } => (code, message),
                    other => (None, other.to_string()),
                };
                Err(DbTestFailure {
                    ok: false,
                    code,
                    message,
                })
            }
        }
    }
}
