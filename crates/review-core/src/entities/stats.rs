//! Assignment statistics rows

use std::cmp::Ordering;

use crate::value_objects::PrStatus;

/// Number of current review assignments held by a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewerStat {
    pub user_id: String,
    pub username: String,
    pub assigned_count: i64,
}

/// Number of reviewers currently assigned to a pull request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestStat {
    pub pull_request_id: String,
    pub pull_request_name: String,
    pub author_id: String,
    pub status: PrStatus,
    pub reviewer_count: i64,
}

impl ReviewerStat {
    /// Count descending, then user id ascending
    pub fn ranking(a: &Self, b: &Self) -> Ordering {
        b.assigned_count
            .cmp(&a.assigned_count)
            .then_with(|| a.user_id.cmp(&b.user_id))
    }
}

impl PullRequestStat {
    /// Count descending, then pull request id ascending
    pub fn ranking(a: &Self, b: &Self) -> Ordering {
        b.reviewer_count
            .cmp(&a.reviewer_count)
            .then_with(|| a.pull_request_id.cmp(&b.pull_request_id))
    }
}
