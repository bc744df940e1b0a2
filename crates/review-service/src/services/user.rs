//! User service
//!
//! Activity flag management and review lookups.

use tracing::{info, instrument};

use crate::dto::{
    PullRequestShortResponse, SetUserActiveRequest, UserResponse, UserReviewsResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Set a user's active flag. Idempotent.
    #[instrument(skip(self, request), fields(user_id = %request.user_id, is_active = request.is_active))]
    pub async fn set_active(&self, request: SetUserActiveRequest) -> ServiceResult<UserResponse> {
        self.ctx
            .user_repo()
            .set_active(&request.user_id, request.is_active)
            .await?
            .ok_or_else(|| ServiceError::not_found("user", request.user_id.as_str()))?;

        let user = self
            .ctx
            .user_repo()
            .find_with_team(&request.user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("user", request.user_id.as_str()))?;

        info!("User activity updated");
        Ok(UserResponse::from(user))
    }

    /// List pull requests on which the user is currently a reviewer
    #[instrument(skip(self))]
    pub async fn get_reviews(&self, user_id: &str) -> ServiceResult<UserReviewsResponse> {
        if !self.ctx.user_repo().exists(user_id).await? {
            return Err(ServiceError::not_found("user", user_id));
        }

        let pull_requests = self
            .ctx
            .pull_request_repo()
            .find_by_reviewer(user_id)
            .await?
            .into_iter()
            .map(PullRequestShortResponse::from)
            .collect();

        Ok(UserReviewsResponse {
            user_id: user_id.to_string(),
            pull_requests,
        })
    }
}
