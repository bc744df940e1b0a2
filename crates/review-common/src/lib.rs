//! # review-common
//!
//! Shared utilities including configuration, error handling, and telemetry.

pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, Environment,
    RateLimitConfig, ServerConfig,
};
pub use error::{AppError, AppResult, ErrorResponse};
pub use telemetry::{try_init_tracing, TracingConfig, TracingError};
