//! PostgreSQL implementation of AvailabilityRepository

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::instrument;

use roster_core::entities::{Availability, MemberNightStatus, NightResponse};
use roster_core::traits::{AvailabilityRepository, RepoResult};
use roster_core::value_objects::{MemberId, NightId};

use crate::models::{AvailabilityModel, MemberNightStatusModel, NightResponseModel};

use super::error::{map_availability_write_error, map_db_error};

/// PostgreSQL implementation of AvailabilityRepository
#[derive(Clone)]
pub struct PgAvailabilityRepository {
    pool: PgPool,
}

impl PgAvailabilityRepository {
    /// Create a new PgAvailabilityRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AvailabilityRepository for PgAvailabilityRepository {
    #[instrument(skip(self, candidate), fields(
        member_id = %candidate.member_id,
        night_id = %candidate.night_id,
        status = %candidate.status,
    ))]
    async fn upsert_status(&self, candidate: &Availability) -> RepoResult<Availability> {
        let model = sqlx::query_as::<_, AvailabilityModel>(
            r#"
            INSERT INTO availability (id, member_id, night_id, status, updated_at)
            VALUES ($1, $2, $3, $4, NOW())
            ON CONFLICT (member_id, night_id) DO UPDATE
                SET status = EXCLUDED.status,
                    updated_at = NOW()
            RETURNING id, member_id, night_id, status, updated_at
            "#,
        )
        .bind(candidate.id.into_inner())
        .bind(candidate.member_id.into_inner())
        .bind(candidate.night_id.into_inner())
        .bind(candidate.status.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_availability_write_error(e, candidate.member_id, candidate.night_id))?;

        Availability::try_from(model)
    }

    #[instrument(skip(self))]
    async fn for_member(
        &self,
        member_id: MemberId,
        from: NaiveDate,
        limit: i64,
    ) -> RepoResult<Vec<MemberNightStatus>> {
        let results = sqlx::query_as::<_, MemberNightStatusModel>(
            r#"
            SELECT sn.id AS night_id, sn.night_date, sn.start_time, sn.end_time, sn.notes,
                   COALESCE(a.status, 'unavailable') AS status
            FROM schedule_nights sn
            LEFT JOIN availability a
                ON a.night_id = sn.id AND a.member_id = $1
            WHERE sn.night_date >= $2
            ORDER BY sn.night_date ASC, sn.start_time ASC
            LIMIT $3
            "#,
        )
        .bind(member_id.into_inner())
        .bind(from)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(MemberNightStatus::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn for_night(&self, night_id: NightId) -> RepoResult<Vec<NightResponse>> {
        let results = sqlx::query_as::<_, NightResponseModel>(
            r#"
            SELECT a.id AS availability_id, a.status, a.updated_at,
                   m.id AS member_id, m.email, m.full_name, m.is_admin
            FROM availability a
            INNER JOIN members m ON m.id = a.member_id
            WHERE a.night_id = $1
            ORDER BY m.full_name ASC NULLS LAST, m.email ASC
            "#,
        )
        .bind(night_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(NightResponse::try_from).collect()
    }
}
