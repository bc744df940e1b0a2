//! Team service
//!
//! Team creation with member upsert, and team lookup.

use review_core::entities::{Team, TeamMember, TeamWithMembers};
use review_core::DomainError;
use tracing::{debug, info, instrument};

use crate::dto::{CreateTeamRequest, TeamResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Team service
pub struct TeamService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TeamService<'a> {
    /// Create a new TeamService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a team and add or move its members into it.
    ///
    /// A member whose user id already exists is overwritten (name, team and
    /// active flag), even if it currently belongs to another team.
    #[instrument(skip(self, request), fields(team_name = %request.team_name))]
    pub async fn create_team(&self, request: CreateTeamRequest) -> ServiceResult<TeamResponse> {
        if self.ctx.team_repo().exists(&request.team_name).await? {
            return Err(DomainError::TeamExists(request.team_name).into());
        }

        let team = self.ctx.team_repo().create(&request.team_name).await?;

        for member in request.members.into_iter().map(TeamMember::from) {
            self.upsert_member(&member, team.id).await?;
        }

        let team = self.with_members(team).await?;
        info!(
            members = team.members.len(),
            active = team.active_count(),
            "Team created"
        );

        Ok(TeamResponse::from(team))
    }

    /// Get a team with its current members
    #[instrument(skip(self))]
    pub async fn get_team(&self, team_name: &str) -> ServiceResult<TeamResponse> {
        let team = self
            .ctx
            .team_repo()
            .find_by_name(team_name)
            .await?
            .ok_or_else(|| ServiceError::not_found("team", team_name))?;

        Ok(TeamResponse::from(self.with_members(team).await?))
    }

    async fn upsert_member(&self, member: &TeamMember, team_id: i64) -> ServiceResult<()> {
        let users = self.ctx.user_repo();
        if users.exists(&member.user_id).await? {
            debug!(user_id = %member.user_id, "Re-parenting existing user");
            users.update(member, team_id).await?;
        } else {
            users.create(member, team_id).await?;
        }
        Ok(())
    }

    async fn with_members(&self, team: Team) -> ServiceResult<TeamWithMembers> {
        let members = self
            .ctx
            .user_repo()
            .find_by_team(team.id)
            .await?
            .iter()
            .map(TeamMember::from)
            .collect();

        Ok(TeamWithMembers { team, members })
    }
}
