//! Team entity <-> model mapper

use review_core::entities::Team;

use crate::models::TeamModel;

/// Convert TeamModel to Team entity
impl From<TeamModel> for Team {
    fn from(model: TeamModel) -> Self {
        Team {
            id: model.id,
            name: model.team_name,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
