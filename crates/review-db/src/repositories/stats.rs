//! PostgreSQL implementation of StatsRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use review_core::entities::{PullRequestStat, ReviewerStat};
use review_core::traits::{RepoResult, StatsRepository};

use crate::models::{PullRequestStatModel, ReviewerStatModel};

use super::error::map_db_error;

/// PostgreSQL implementation of StatsRepository
#[derive(Clone)]
pub struct PgStatsRepository {
    pool: PgPool,
}

impl PgStatsRepository {
    /// Create a new PgStatsRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StatsRepository for PgStatsRepository {
    #[instrument(skip(self))]
    async fn reviewer_stats(&self) -> RepoResult<Vec<ReviewerStat>> {
        let results = sqlx::query_as::<_, ReviewerStatModel>(
            r"
            SELECT u.user_id, u.username, COUNT(r.id) AS assigned_count
            FROM users u
            LEFT JOIN pr_reviewers r ON r.reviewer_user_id = u.user_id
            GROUP BY u.id, u.user_id, u.username
            ORDER BY assigned_count DESC, u.user_id ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(ReviewerStat::from).collect())
    }

    #[instrument(skip(self))]
    async fn pull_request_stats(&self) -> RepoResult<Vec<PullRequestStat>> {
        let results = sqlx::query_as::<_, PullRequestStatModel>(
            r"
            SELECT p.pull_request_id, p.pull_request_name, p.author_id, p.status,
                   COUNT(r.id) AS reviewer_count
            FROM pull_requests p
            LEFT JOIN pr_reviewers r ON r.pull_request_id = p.pull_request_id
            GROUP BY p.id, p.pull_request_id, p.pull_request_name, p.author_id, p.status
            ORDER BY reviewer_count DESC, p.pull_request_id ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(PullRequestStat::try_from).collect()
    }
}
