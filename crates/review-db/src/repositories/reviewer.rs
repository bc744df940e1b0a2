//! PostgreSQL implementation of ReviewerRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{info, instrument};

use review_core::error::DomainError;
use review_core::traits::{RepoResult, ReviewerRepository};
use review_core::PrStatus;

use crate::mappers::parse_status;

use super::error::{map_db_error, map_foreign_key_violation, pr_not_found};

/// PostgreSQL implementation of ReviewerRepository
#[derive(Clone)]
pub struct PgReviewerRepository {
    pool: PgPool,
}

impl PgReviewerRepository {
    /// Create a new PgReviewerRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReviewerRepository for PgReviewerRepository {
    #[instrument(skip(self))]
    async fn assign(&self, pull_request_id: &str, user_id: &str) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO pr_reviewers (pull_request_id, reviewer_user_id)
            VALUES ($1, $2)
            ON CONFLICT (pull_request_id, reviewer_user_id) DO NOTHING
            ",
        )
        .bind(pull_request_id)
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_foreign_key_violation(e, || DomainError::not_found("pr or user", user_id))
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn remove(&self, pull_request_id: &str, user_id: &str) -> RepoResult<()> {
        sqlx::query("DELETE FROM pr_reviewers WHERE pull_request_id = $1 AND reviewer_user_id = $2")
            .bind(pull_request_id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_pull_request(&self, pull_request_id: &str) -> RepoResult<Vec<String>> {
        sqlx::query_scalar::<_, String>(
            r"
            SELECT reviewer_user_id
            FROM pr_reviewers
            WHERE pull_request_id = $1
            ORDER BY id
            ",
        )
        .bind(pull_request_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn is_assigned(&self, pull_request_id: &str, user_id: &str) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(
                SELECT 1 FROM pr_reviewers
                WHERE pull_request_id = $1 AND reviewer_user_id = $2
            )
            ",
        )
        .bind(pull_request_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn replace(
        &self,
        pull_request_id: &str,
        old_user_id: &str,
        new_user_id: &str,
    ) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Row lock on the PR serializes concurrent swaps and merges
        let status = sqlx::query_scalar::<_, String>(
            "SELECT status FROM pull_requests WHERE pull_request_id = $1 FOR UPDATE",
        )
        .bind(pull_request_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        .ok_or_else(|| pr_not_found(pull_request_id))?;

        if parse_status(&status)? == PrStatus::Merged {
            return Err(DomainError::PrMerged(pull_request_id.to_string()));
        }

        let removed = sqlx::query(
            "DELETE FROM pr_reviewers WHERE pull_request_id = $1 AND reviewer_user_id = $2",
        )
        .bind(pull_request_id)
        .bind(old_user_id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if removed.rows_affected() == 0 {
            return Err(DomainError::NotAssigned {
                pr_id: pull_request_id.to_string(),
                reviewer_id: old_user_id.to_string(),
            });
        }

        sqlx::query(
            r"
            INSERT INTO pr_reviewers (pull_request_id, reviewer_user_id)
            VALUES ($1, $2)
            ON CONFLICT (pull_request_id, reviewer_user_id) DO NOTHING
            ",
        )
        .bind(pull_request_id)
        .bind(new_user_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            map_foreign_key_violation(e, || DomainError::not_found("user", new_user_id))
        })?;

        tx.commit().await.map_err(map_db_error)?;

        info!("Reviewer replaced");
        Ok(())
    }
}
