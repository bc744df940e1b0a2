//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use review_core::entities::{TeamMember, User, UserWithTeam};
use review_core::error::DomainError;
use review_core::traits::{RepoResult, UserRepository};

use crate::models::{UserModel, UserWithTeamModel};

use super::error::{map_db_error, map_unique_violation, user_not_found};

const USER_COLUMNS: &str = "id, user_id, username, team_id, is_active, created_at, updated_at";

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn exists(&self, user_id: &str) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE user_id = $1)")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self, member), fields(user_id = %member.user_id))]
    async fn create(&self, member: &TeamMember, team_id: i64) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO users (user_id, username, team_id, is_active)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(&member.user_id)
        .bind(&member.username)
        .bind(team_id)
        .bind(member.is_active)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || {
                DomainError::internal(format!(
                    "user {} was created concurrently",
                    member.user_id
                ))
            })
        })?;

        Ok(())
    }

    #[instrument(skip(self, member), fields(user_id = %member.user_id))]
    async fn update(&self, member: &TeamMember, team_id: i64) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET username = $2, team_id = $3, is_active = $4, updated_at = NOW()
            WHERE user_id = $1
            ",
        )
        .bind(&member.user_id)
        .bind(&member.username)
        .bind(team_id)
        .bind(member.is_active)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(user_not_found(&member.user_id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, user_id: &str) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE user_id = $1"
        ))
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn find_with_team(&self, user_id: &str) -> RepoResult<Option<UserWithTeam>> {
        let result = sqlx::query_as::<_, UserWithTeamModel>(
            r"
            SELECT u.user_id, u.username, t.team_name, u.is_active
            FROM users u
            JOIN teams t ON t.id = u.team_id
            WHERE u.user_id = $1
            ",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(UserWithTeam::from))
    }

    #[instrument(skip(self))]
    async fn find_by_team(&self, team_id: i64) -> RepoResult<Vec<User>> {
        let results = sqlx::query_as::<_, UserModel>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE team_id = $1 ORDER BY id"
        ))
        .bind(team_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(User::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_active_by_team(&self, team_id: i64) -> RepoResult<Vec<User>> {
        let results = sqlx::query_as::<_, UserModel>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE team_id = $1 AND is_active ORDER BY user_id"
        ))
        .bind(team_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(User::from).collect())
    }

    #[instrument(skip(self))]
    async fn set_active(&self, user_id: &str, is_active: bool) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(&format!(
            r"
            UPDATE users
            SET is_active = $2, updated_at = NOW()
            WHERE user_id = $1
            RETURNING {USER_COLUMNS}
            "
        ))
        .bind(user_id)
        .bind(is_active)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }
}
