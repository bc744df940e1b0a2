//! # review-db
//!
//! Storage layer implementing the `review-core` repository traits.
//!
//! ## Overview
//!
//! - Connection pool management with startup retry
//! - Idempotent schema bootstrap
//! - Database models with SQLx `FromRow` derives and model → entity mappers
//! - PostgreSQL repository implementations
//! - [`InMemoryStore`], a process-local implementation of every trait
//!
//! ## Usage
//!
//! ```rust,ignore
//! use review_common::AppConfig;
//! use review_db::{create_pool_with_retry, ensure_schema, DatabaseConfig, PgTeamRepository};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let app_config = AppConfig::from_env()?;
//!     let config = DatabaseConfig::from(&app_config.database);
//!     let pool = create_pool_with_retry(&config).await?;
//!     ensure_schema(&pool).await?;
//!     let teams = PgTeamRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;
pub mod schema;

// Re-export commonly used types
pub use memory::InMemoryStore;
pub use pool::{create_pool, create_pool_with_retry, DatabaseConfig, PgPool};
pub use repositories::{
    PgHealthCheck, PgPullRequestRepository, PgReviewerRepository, PgStatsRepository,
    PgTeamRepository, PgUserRepository,
};
pub use schema::{ensure_schema, ensure_schema_with_retry};
