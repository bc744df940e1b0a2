//! Team handlers

use axum::{extract::State, Json};
use review_service::dto::{CreateTeamRequest, TeamEnvelope, TeamResponse};
use review_service::TeamService;

use crate::extractors::{QueryParams, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Create a team and upsert its members
///
/// POST /team/add
pub async fn add_team(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateTeamRequest>,
) -> ApiResult<Created<Json<TeamEnvelope>>> {
    let service = TeamService::new(state.service_context());
    let team = service.create_team(request).await?;
    Ok(Created(Json(TeamEnvelope { team })))
}

/// Get a team with its members
///
/// GET /team/get?team_name=
pub async fn get_team(
    State(state): State<AppState>,
    params: QueryParams,
) -> ApiResult<Json<TeamResponse>> {
    let team_name = params.require("team_name")?;
    let service = TeamService::new(state.service_context());
    Ok(Json(service.get_team(team_name).await?))
}
