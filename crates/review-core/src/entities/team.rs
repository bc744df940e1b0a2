//! Team entity - a named group of users that review each other's work

use chrono::{DateTime, Utc};

use super::user::TeamMember;

/// Team entity
///
/// `name` is the business key; `id` is the storage key referenced by users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Team {
    /// Create a new Team
    pub fn new(id: i64, name: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Team together with its current membership, in storage order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamWithMembers {
    pub team: Team,
    pub members: Vec<TeamMember>,
}

impl TeamWithMembers {
    /// Number of members that can currently be picked as reviewers
    pub fn active_count(&self) -> usize {
        self.members.iter().filter(|m| m.is_active).count()
    }
}
