//! PostgreSQL implementation of TeamRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use review_core::entities::Team;
use review_core::error::DomainError;
use review_core::traits::{RepoResult, TeamRepository};

use crate::models::TeamModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of TeamRepository
#[derive(Clone)]
pub struct PgTeamRepository {
    pool: PgPool,
}

impl PgTeamRepository {
    /// Create a new PgTeamRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeamRepository for PgTeamRepository {
    #[instrument(skip(self))]
    async fn exists(&self, name: &str) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM teams WHERE team_name = $1)")
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn create(&self, name: &str) -> RepoResult<Team> {
        let model = sqlx::query_as::<_, TeamModel>(
            r"
            INSERT INTO teams (team_name)
            VALUES ($1)
            RETURNING id, team_name, created_at, updated_at
            ",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::TeamExists(name.to_string())))?;

        Ok(Team::from(model))
    }

    #[instrument(skip(self))]
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Team>> {
        let result = sqlx::query_as::<_, TeamModel>(
            r"
            SELECT id, team_name, created_at, updated_at
            FROM teams
            WHERE team_name = $1
            ",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Team::from))
    }
}
