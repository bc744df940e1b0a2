//! PostgreSQL readiness probe

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use review_core::traits::{RepoResult, StorageHealth};

use super::error::map_db_error;

/// Pings the database with a trivial query
#[derive(Clone)]
pub struct PgHealthCheck {
    pool: PgPool,
}

impl PgHealthCheck {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StorageHealth for PgHealthCheck {
    #[instrument(skip(self))]
    async fn ping(&self) -> RepoResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;
        Ok(())
    }
}
