//! PostgreSQL implementation of MemberRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use roster_core::entities::Member;
use roster_core::traits::{MemberRepository, RepoResult};

use crate::models::MemberModel;

use super::error::map_db_error;

/// PostgreSQL implementation of MemberRepository
#[derive(Clone)]
pub struct PgMemberRepository {
    pool: PgPool,
}

impl PgMemberRepository {
    /// Create a new PgMemberRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberRepository for PgMemberRepository {
    #[instrument(skip(self, candidate), fields(email = %candidate.email))]
    async fn upsert_by_email(&self, candidate: &Member) -> RepoResult<Member> {
        // COALESCE keeps a stored name when the caller supplies none.
        let model = sqlx::query_as::<_, MemberModel>(
            r#"
            INSERT INTO members (id, email, full_name)
            VALUES ($1, $2, $3)
            ON CONFLICT (email) DO UPDATE
                SET full_name = COALESCE(EXCLUDED.full_name, members.full_name)
            RETURNING id, email, full_name, is_admin
            "#,
        )
        .bind(candidate.id.into_inner())
        .bind(&candidate.email)
        .bind(&candidate.full_name)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(model.into())
    }
}
