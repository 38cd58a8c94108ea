//! Store connectivity probe

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use roster_core::traits::{RepoResult, StoreProbe};

use super::error::map_db_error;

/// Round-trips `SELECT NOW()` against the pool
#[derive(Clone)]
pub struct PgStoreProbe {
    pool: PgPool,
}

impl PgStoreProbe {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StoreProbe for PgStoreProbe {
    #[instrument(skip(self))]
    async fn server_time(&self) -> RepoResult<DateTime<Utc>> {
        let (now,): (DateTime<Utc>,) = sqlx::query_as("SELECT NOW()")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;
        Ok(now)
    }
}
