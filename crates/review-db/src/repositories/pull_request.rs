//! PostgreSQL implementation of PullRequestRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use review_core::entities::PullRequest;
use review_core::error::DomainError;
use review_core::traits::{PullRequestRepository, RepoResult};

use crate::models::PullRequestModel;

use super::error::{map_db_error, map_unique_violation};

const PR_COLUMNS: &str =
    "id, pull_request_id, pull_request_name, author_id, status, created_at, merged_at, updated_at";

/// PostgreSQL implementation of PullRequestRepository
#[derive(Clone)]
pub struct PgPullRequestRepository {
    pool: PgPool,
}

impl PgPullRequestRepository {
    /// Create a new PgPullRequestRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PullRequestRepository for PgPullRequestRepository {
    #[instrument(skip(self))]
    async fn exists(&self, pull_request_id: &str) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM pull_requests WHERE pull_request_id = $1)",
        )
        .bind(pull_request_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn create(
        &self,
        pull_request_id: &str,
        name: &str,
        author_id: &str,
    ) -> RepoResult<PullRequest> {
        let model = sqlx::query_as::<_, PullRequestModel>(&format!(
            r"
            INSERT INTO pull_requests (pull_request_id, pull_request_name, author_id, status)
            VALUES ($1, $2, $3, 'OPEN')
            RETURNING {PR_COLUMNS}
            "
        ))
        .bind(pull_request_id)
        .bind(name)
        .bind(author_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            let missing_author = e
                .as_database_error()
                .is_some_and(|db| db.is_foreign_key_violation());
            if missing_author {
                DomainError::not_found("author", author_id)
            } else {
                map_unique_violation(e, || DomainError::PrExists(pull_request_id.to_string()))
            }
        })?;

        PullRequest::try_from(model)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, pull_request_id: &str) -> RepoResult<Option<PullRequest>> {
        let result = sqlx::query_as::<_, PullRequestModel>(&format!(
            "SELECT {PR_COLUMNS} FROM pull_requests WHERE pull_request_id = $1"
        ))
        .bind(pull_request_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(PullRequest::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn merge(&self, pull_request_id: &str) -> RepoResult<Option<PullRequest>> {
        // Only an OPEN row is touched, so merged_at is stamped once
        let merged = sqlx::query_as::<_, PullRequestModel>(&format!(
            r"
            UPDATE pull_requests
            SET status = 'MERGED', merged_at = NOW(), updated_at = NOW()
            WHERE pull_request_id = $1 AND status = 'OPEN'
            RETURNING {PR_COLUMNS}
            "
        ))
        .bind(pull_request_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        match merged {
            Some(model) => PullRequest::try_from(model).map(Some),
            None => {
                debug!("nothing to merge, reading current state");
                self.find_by_id(pull_request_id).await
            }
        }
    }

    #[instrument(skip(self))]
    async fn find_by_reviewer(&self, user_id: &str) -> RepoResult<Vec<PullRequest>> {
        let results = sqlx::query_as::<_, PullRequestModel>(
            r"
            SELECT p.id, p.pull_request_id, p.pull_request_name, p.author_id, p.status,
                   p.created_at, p.merged_at, p.updated_at
            FROM pull_requests p
            JOIN pr_reviewers r ON r.pull_request_id = p.pull_request_id
            WHERE r.reviewer_user_id = $1
            ORDER BY p.created_at, p.id
            ",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(PullRequest::try_from).collect()
    }
}
