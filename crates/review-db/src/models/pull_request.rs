//! Pull request database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for pull_requests table
#[derive(Debug, Clone, FromRow)]
pub struct PullRequestModel {
    pub id: i64,
    pub pull_request_id: String,
    pub pull_request_name: String,
    pub author_id: String,
    /// 'OPEN' or 'MERGED', enforced by a CHECK constraint
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub merged_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}
