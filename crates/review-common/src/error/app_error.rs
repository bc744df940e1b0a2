//! Application error types
//!
//! Errors raised while bootstrapping and running the process, outside a single
//! assignment operation.

use serde::Serialize;

use crate::config::ConfigError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Database errors
    #[error("Database error: {0}")]
    Database(String),

    // Listener / IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Create a database error from any displayable cause
    #[must_use]
    pub fn database(err: impl std::fmt::Display) -> Self {
        Self::Database(err.to_string())
    }
}

/// Error body nested under `"error"` in every failed API response
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
