//! PostgreSQL implementation of ReactionRepository
//!
//! One row per (user_id, work_id); the `kind` column carries the polarity, so
//! like and dislike exclude each other by construction.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use mastera_core::{
    EngagementCounts, Reaction, ReactionKind, ReactionRepository, RepoResult, UserId, WorkId,
};

use crate::models::{ReactionCountModel, ReactionModel};

use super::error::{map_db_error, map_foreign_key_violation, work_not_found};

/// PostgreSQL implementation of ReactionRepository
#[derive(Clone)]
pub struct PgReactionRepository {
    pool: PgPool,
}

impl PgReactionRepository {
    /// Create a new PgReactionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReactionRepository for PgReactionRepository {
    #[instrument(skip(self))]
    async fn find(&self, user_id: &UserId, work_id: WorkId) -> RepoResult<Option<Reaction>> {
        let result = sqlx::query_as::<_, ReactionModel>(
            r#"
            SELECT user_id, work_id, kind, created_at, updated_at
            FROM work_reactions
            WHERE user_id = $1 AND work_id = $2
            "#,
        )
        .bind(user_id.as_str())
        .bind(work_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Reaction::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn upsert(
        &self,
        user_id: &UserId,
        work_id: WorkId,
        kind: ReactionKind,
    ) -> RepoResult<Reaction> {
        // updated_at only moves when the polarity actually flips
        let model = sqlx::query_as::<_, ReactionModel>(
            r#"
            INSERT INTO work_reactions (user_id, work_id, kind, created_at, updated_at)
            VALUES ($1, $2, $3, NOW(), NOW())
            ON CONFLICT (user_id, work_id) DO UPDATE
            SET kind = EXCLUDED.kind,
                updated_at = CASE
                    WHEN work_reactions.kind = EXCLUDED.kind THEN work_reactions.updated_at
                    ELSE NOW()
                END
            RETURNING user_id, work_id, kind, created_at, updated_at
            "#,
        )
        .bind(user_id.as_str())
        .bind(work_id.into_inner())
        .bind(kind.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_foreign_key_violation(e, || work_not_found(work_id)))?;

        Reaction::try_from(model)
    }

    #[instrument(skip(self))]
    async fn delete(
        &self,
        user_id: &UserId,
        work_id: WorkId,
        kind: ReactionKind,
    ) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM work_reactions WHERE user_id = $1 AND work_id = $2 AND kind = $3
            "#,
        )
        .bind(user_id.as_str())
        .bind(work_id.into_inner())
        .bind(kind.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn count_by_kind(&self, work_id: WorkId) -> RepoResult<EngagementCounts> {
        let counts = sqlx::query_as::<_, ReactionCountModel>(
            r#"
            SELECT
                COUNT(*) FILTER (WHERE kind = 'like') AS likes,
                COUNT(*) FILTER (WHERE kind = 'dislike') AS dislikes
            FROM work_reactions
            WHERE work_id = $1
            "#,
        )
        .bind(work_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(counts.into())
    }
}
