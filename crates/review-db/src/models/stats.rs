//! Aggregation rows for statistics queries

use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct ReviewerStatModel {
    pub user_id: String,
    pub username: String,
    pub assigned_count: i64,
}

#[derive(Debug, Clone, FromRow)]
pub struct PullRequestStatModel {
    pub pull_request_id: String,
    pub pull_request_name: String,
    pub author_id: String,
    pub status: String,
    pub reviewer_count: i64,
}
