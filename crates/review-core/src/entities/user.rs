//! User entity - a team member who may author or review pull requests

use chrono::{DateTime, Utc};

/// User entity
///
/// `user_id` is the external, globally unique identifier; `id` is the storage key.
/// A user belongs to exactly one team at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub user_id: String,
    pub username: String,
    pub team_id: i64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Project the user onto its team-membership view
    pub fn to_member(&self) -> TeamMember {
        TeamMember {
            user_id: self.user_id.clone(),
            username: self.username.clone(),
            is_active: self.is_active,
        }
    }

    /// Check if the user can be picked as a reviewer
    #[inline]
    pub fn is_eligible_reviewer(&self) -> bool {
        self.is_active
    }
}

/// Membership data supplied when creating a team or updating its members
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamMember {
    pub user_id: String,
    pub username: String,
    pub is_active: bool,
}

impl TeamMember {
    pub fn new(user_id: impl Into<String>, username: impl Into<String>, is_active: bool) -> Self {
        Self {
            user_id: user_id.into(),
            username: username.into(),
            is_active,
        }
    }
}

impl From<&User> for TeamMember {
    fn from(user: &User) -> Self {
        user.to_member()
    }
}

/// User with the name of its team resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserWithTeam {
    pub user_id: String,
    pub username: String,
    pub team_name: String,
    pub is_active: bool,
}
