//! Team database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for teams table
#[derive(Debug, Clone, FromRow)]
pub struct TeamModel {
    pub id: i64,
    pub team_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
