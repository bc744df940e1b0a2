//! Pull request entity

use chrono::{DateTime, Utc};

use crate::value_objects::PrStatus;

/// Pull request entity
///
/// Invariant: `merged_at.is_some()` if and only if `status == PrStatus::Merged`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequest {
    pub id: i64,
    pub pull_request_id: String,
    pub name: String,
    pub author_id: String,
    pub status: PrStatus,
    pub created_at: DateTime<Utc>,
    pub merged_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}

impl PullRequest {
    /// Create a new OPEN pull request
    pub fn new(id: i64, pull_request_id: String, name: String, author_id: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            pull_request_id,
            name,
            author_id,
            status: PrStatus::Open,
            created_at: now,
            merged_at: None,
            updated_at: now,
        }
    }

    #[inline]
    pub fn is_merged(&self) -> bool {
        self.status.is_terminal()
    }

    /// Transition to MERGED, stamping `merged_at` on the first call only.
    ///
    /// Returns `false` when the pull request was already merged.
    pub fn merge(&mut self, at: DateTime<Utc>) -> bool {
        if self.is_merged() {
            return false;
        }
        self.status = PrStatus::Merged;
        self.merged_at = Some(at);
        self.updated_at = at;
        true
    }
}

/// Pull request together with its current reviewers, in assignment order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestWithReviewers {
    pub pull_request: PullRequest,
    pub reviewers: Vec<String>,
}

impl PullRequestWithReviewers {
    pub fn new(pull_request: PullRequest, reviewers: Vec<String>) -> Self {
        Self {
            pull_request,
            reviewers,
        }
    }

    /// Check if a user is currently assigned as reviewer
    pub fn has_reviewer(&self, user_id: &str) -> bool {
        self.reviewers.iter().any(|r| r == user_id)
    }
}
