//! User entity <-> model mappers

use review_core::entities::{User, UserWithTeam};

use crate::models::{UserModel, UserWithTeamModel};

/// Convert UserModel to User entity
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id,
            user_id: model.user_id,
            username: model.username,
            team_id: model.team_id,
            is_active: model.is_active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<UserWithTeamModel> for UserWithTeam {
    fn from(model: UserWithTeamModel) -> Self {
        UserWithTeam {
            user_id: model.user_id,
            username: model.username,
            team_name: model.team_name,
            is_active: model.is_active,
        }
    }
}
