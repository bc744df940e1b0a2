//! Database connection pool management

mod postgres;

pub use postgres::{create_pool, create_pool_with_retry, retry_with_backoff, DatabaseConfig};

// Re-export PgPool for convenience
pub use sqlx::postgres::PgPool;
