//! PostgreSQL implementation of NightRepository

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::instrument;

use roster_core::entities::{NightWithCounts, ScheduleNight};
use roster_core::traits::{NightRepository, RepoResult};
use roster_core::value_objects::NightId;

use crate::models::{NightModel, NightWithCountsModel};

use super::error::{map_db_error, night_not_found};

/// PostgreSQL implementation of NightRepository
#[derive(Clone)]
pub struct PgNightRepository {
    pool: PgPool,
}

impl PgNightRepository {
    /// Create a new PgNightRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NightRepository for PgNightRepository {
    #[instrument(skip(self))]
    async fn list_upcoming(&self, from: NaiveDate, limit: i64) -> RepoResult<Vec<ScheduleNight>> {
        let results = sqlx::query_as::<_, NightModel>(
            r#"
            SELECT id, night_date, start_time, end_time, notes
            FROM schedule_nights
            WHERE night_date >= $1
            ORDER BY night_date ASC, start_time ASC
            LIMIT $2
            "#,
        )
        .bind(from)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(ScheduleNight::from).collect())
    }

    #[instrument(skip(self))]
    async fn list_with_counts(
        &self,
        from: NaiveDate,
        limit: i64,
    ) -> RepoResult<Vec<NightWithCounts>> {
        // Counts cover recorded rows only; untoggled members are not counted
        // as unavailable here.
        let results = sqlx::query_as::<_, NightWithCountsModel>(
            r#"
            SELECT sn.id, sn.night_date, sn.start_time, sn.end_time, sn.notes,
                   COUNT(a.id) FILTER (WHERE a.status = 'available') AS available_count,
                   COUNT(a.id) FILTER (WHERE a.status = 'unavailable') AS unavailable_count
            FROM schedule_nights sn
            LEFT JOIN availability a ON a.night_id = sn.id
            WHERE sn.night_date >= $1
            GROUP BY sn.id
            ORDER BY sn.night_date ASC, sn.start_time ASC
            LIMIT $2
            "#,
        )
        .bind(from)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(NightWithCounts::from).collect())
    }

    #[instrument(skip(self, night), fields(night_date = %night.night_date))]
    async fn create(&self, night: &ScheduleNight) -> RepoResult<ScheduleNight> {
        let model = sqlx::query_as::<_, NightModel>(
            r#"
            INSERT INTO schedule_nights (id, night_date, start_time, end_time, notes)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, night_date, start_time, end_time, notes
            "#,
        )
        .bind(night.id.into_inner())
        .bind(night.night_date)
        .bind(night.start_time)
        .bind(night.end_time)
        .bind(&night.notes)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(model.into())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: NightId) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM schedule_nights WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(night_not_found(id));
        }

        Ok(())
    }
}
