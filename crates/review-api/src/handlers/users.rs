//! User handlers
//!
//! Activity flag updates and per-user review lists.

use axum::{extract::State, Json};
use review_service::dto::{SetUserActiveRequest, UserEnvelope, UserReviewsResponse};
use review_service::UserService;

use crate::extractors::{QueryParams, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Set a user's active flag
///
/// POST /users/setIsActive
pub async fn set_is_active(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SetUserActiveRequest>,
) -> ApiResult<Json<UserEnvelope>> {
    let service = UserService::new(state.service_context());
    let user = service.set_active(request).await?;
    Ok(Json(UserEnvelope { user }))
}

/// Pull requests the user currently reviews
///
/// GET /users/getReview?user_id=
pub async fn get_review(
    State(state): State<AppState>,
    params: QueryParams,
) -> ApiResult<Json<UserReviewsResponse>> {
    let user_id = params.require("user_id")?;
    let service = UserService::new(state.service_context());
    Ok(Json(service.get_reviews(user_id).await?))
}
