//! Service layer error types
//!
//! Wraps the closed domain taxonomy and adds request-level validation.

use review_core::DomainError;
use std::fmt;

/// Service layer error type
#[derive(Debug)]
pub enum ServiceError {
    /// Domain rule violation or storage failure
    Domain(DomainError),

    /// Request failed input validation
    Validation(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain(e) => write!(f, "{e}"),
            Self::Validation(msg) => write!(f, "Validation error: {msg}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Domain(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}

impl ServiceError {
    /// Create a not found error
    pub fn not_found(resource: &'static str, id: impl Into<String>) -> Self {
        Self::Domain(DomainError::not_found(resource, id))
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Domain(DomainError::Internal(msg.into()))
    }

    /// Get the error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Domain(e) => e.code(),
            Self::Validation(_) => "VALIDATION_ERROR",
        }
    }

    /// The wrapped domain error, if any
    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            Self::Domain(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
