//! Pull request handlers
//!
//! Creation with auto-assignment, merge and reviewer reassignment.

use axum::{extract::State, Json};
use review_service::dto::{
    CreatePullRequestRequest, MergePullRequestRequest, PullRequestEnvelope,
    ReassignReviewerRequest, ReassignResponse,
};
use review_service::PullRequestService;

use crate::extractors::ValidatedJson;
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Create a pull request
///
/// POST /pullRequest/create
pub async fn create_pull_request(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreatePullRequestRequest>,
) -> ApiResult<Created<Json<PullRequestEnvelope>>> {
    let service = PullRequestService::new(state.service_context());
    let pr = service.create(request).await?;
    Ok(Created(Json(PullRequestEnvelope { pr })))
}

/// Merge a pull request (idempotent)
///
/// POST /pullRequest/merge
pub async fn merge_pull_request(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<MergePullRequestRequest>,
) -> ApiResult<Json<PullRequestEnvelope>> {
    let service = PullRequestService::new(state.service_context());
    let pr = service.merge(request).await?;
    Ok(Json(PullRequestEnvelope { pr }))
}

/// Replace one reviewer of an open pull request
///
/// POST /pullRequest/reassign
pub async fn reassign_reviewer(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ReassignReviewerRequest>,
) -> ApiResult<Json<ReassignResponse>> {
    let service = PullRequestService::new(state.service_context());
    Ok(Json(service.reassign(request).await?))
}
