//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
///
/// Every failure of an assignment operation is one of these variants; the
/// HTTP adapter matches on them exhaustively.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("{resource} not found: {id}")]
    NotFound { resource: &'static str, id: String },

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("team_name already exists: {0}")]
    TeamExists(String),

    #[error("PR id already exists: {0}")]
    PrExists(String),

    // =========================================================================
    // Business Rule Violations
    // =========================================================================
    #[error("cannot reassign on merged PR: {0}")]
    PrMerged(String),

    #[error("reviewer {reviewer_id} is not assigned to PR {pr_id}")]
    NotAssigned { pr_id: String, reviewer_id: String },

    #[error("no active replacement candidate in team for PR {0}")]
    NoCandidate(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("{0}")]
    Internal(String),
}

impl DomainError {
    pub fn not_found(resource: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource,
            id: id.into(),
        }
    }

    pub fn internal(cause: impl std::fmt::Display) -> Self {
        Self::Internal(cause.to_string())
    }

    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::TeamExists(_) => "TEAM_EXISTS",
            Self::PrExists(_) => "PR_EXISTS",
            Self::PrMerged(_) => "PR_MERGED",
            Self::NotAssigned { .. } => "NOT_ASSIGNED",
            Self::NoCandidate(_) => "NO_CANDIDATE",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
