//! User database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub user_id: String,
    pub username: String,
    pub team_id: i64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// User joined with its team name
#[derive(Debug, Clone, FromRow)]
pub struct UserWithTeamModel {
    pub user_id: String,
    pub username: String,
    pub team_name: String,
    pub is_active: bool,
}
