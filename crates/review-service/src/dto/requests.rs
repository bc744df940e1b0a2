//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

use review_core::entities::TeamMember;

// ============================================================================
// Team Requests
// ============================================================================

/// Member entry of a team creation request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TeamMemberRequest {
    #[validate(length(min = 1, message = "user_id is required"))]
    pub user_id: String,

    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,

    /// Omitted means inactive
    #[serde(default)]
    pub is_active: bool,
}

impl From<TeamMemberRequest> for TeamMember {
    fn from(req: TeamMemberRequest) -> Self {
        TeamMember::new(req.user_id, req.username, req.is_active)
    }
}

/// Create team request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTeamRequest {
    #[validate(length(min = 1, message = "team_name is required"))]
    pub team_name: String,

    #[validate(nested)]
    pub members: Vec<TeamMemberRequest>,
}

// ============================================================================
// User Requests
// ============================================================================

/// Activate or deactivate a user
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SetUserActiveRequest {
    #[validate(length(min = 1, message = "user_id is required"))]
    pub user_id: String,

    #[serde(default)]
    pub is_active: bool,
}

// ============================================================================
// Pull Request Requests
// ============================================================================

/// Create pull request request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePullRequestRequest {
    #[validate(length(min = 1, message = "pull_request_id is required"))]
    pub pull_request_id: String,

    #[validate(length(min = 1, message = "pull_request_name is required"))]
    pub pull_request_name: String,

    #[validate(length(min = 1, message = "author_id is required"))]
    pub author_id: String,
}

/// Merge pull request request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MergePullRequestRequest {
    #[validate(length(min = 1, message = "pull_request_id is required"))]
    pub pull_request_id: String,
}

/// Replace one reviewer of a pull request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReassignReviewerRequest {
    #[validate(length(min = 1, message = "pull_request_id is required"))]
    pub pull_request_id: String,

    #[validate(length(min = 1, message = "old_user_id is required"))]
    #[serde(alias = "old_reviewer_id")]
    pub old_user_id: String,
}
