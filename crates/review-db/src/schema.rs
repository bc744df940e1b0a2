//! Schema bootstrap
//!
//! The DDL is applied as one multi-statement batch, which PostgreSQL runs in
//! a single implicit transaction. An advisory lock serializes concurrent
//! instances starting at the same time.

use sqlx::PgPool;
use tracing::{info, instrument};

use crate::pool::{retry_with_backoff, DatabaseConfig};

const INIT_SQL: &str = include_str!("../migrations/0001_init.sql");

/// Create all tables and indexes that do not exist yet
#[instrument(skip(pool))]
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(INIT_SQL).execute(pool).await?;
    info!("Database schema is up to date");
    Ok(())
}

/// [`ensure_schema`] with the same retry policy as pool creation
pub async fn ensure_schema_with_retry(
    pool: &PgPool,
    config: &DatabaseConfig,
) -> Result<(), sqlx::Error> {
    retry_with_backoff(
        "schema bootstrap",
        config.connect_retries,
        config.retry_delay,
        || ensure_schema(pool),
    )
    .await
}
