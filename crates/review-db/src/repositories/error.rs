//! Error handling utilities for repositories

use review_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::internal(e)
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    map_db_error(e)
}

/// Check for a foreign key violation and return appropriate error or fallback
pub fn map_foreign_key_violation<F>(e: SqlxError, on_missing: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_foreign_key_violation() {
            return on_missing();
        }
    }
    map_db_error(e)
}

/// Create a "user not found" error
pub fn user_not_found(user_id: &str) -> DomainError {
    DomainError::not_found("user", user_id)
}

/// Create a "pr not found" error
pub fn pr_not_found(pull_request_id: &str) -> DomainError {
    DomainError::not_found("pr", pull_request_id)
}
