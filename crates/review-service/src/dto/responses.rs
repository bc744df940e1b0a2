//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Collections are always serialized as arrays, never `null`.

use serde::Serialize;

use review_core::PrStatus;

// ============================================================================
// Team Responses
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamMemberResponse {
    pub user_id: String,
    pub username: String,
    pub is_active: bool,
}

/// Team with its current membership
#[derive(Debug, Clone, Serialize)]
pub struct TeamResponse {
    pub team_name: String,
    pub members: Vec<TeamMemberResponse>,
}

/// `{"team": ...}`
#[derive(Debug, Clone, Serialize)]
pub struct TeamEnvelope {
    pub team: TeamResponse,
}

// ============================================================================
// User Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub user_id: String,
    pub username: String,
    pub team_name: String,
    pub is_active: bool,
}

/// `{"user": ...}`
#[derive(Debug, Clone, Serialize)]
pub struct UserEnvelope {
    pub user: UserResponse,
}

/// Pull requests a user currently reviews
#[derive(Debug, Clone, Serialize)]
pub struct UserReviewsResponse {
    pub user_id: String,
    pub pull_requests: Vec<PullRequestShortResponse>,
}

// ============================================================================
// Pull Request Responses
// ============================================================================

/// Full pull request view with reviewers and RFC 3339 timestamps
#[derive(Debug, Clone, Serialize)]
pub struct PullRequestResponse {
    pub pull_request_id: String,
    pub pull_request_name: String,
    pub author_id: String,
    pub status: PrStatus,
    pub assigned_reviewers: Vec<String>,
    #[serde(rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(rename = "mergedAt", skip_serializing_if = "Option::is_none")]
    pub merged_at: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PullRequestShortResponse {
    pub pull_request_id: String,
    pub pull_request_name: String,
    pub author_id: String,
    pub status: PrStatus,
}

/// `{"pr": ...}`
#[derive(Debug, Clone, Serialize)]
pub struct PullRequestEnvelope {
    pub pr: PullRequestResponse,
}

/// Result of a reviewer reassignment
#[derive(Debug, Clone, Serialize)]
pub struct ReassignResponse {
    pub pr: PullRequestResponse,
    pub replaced_by: String,
}

// ============================================================================
// Stats Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ReviewerStatResponse {
    pub user_id: String,
    pub username: String,
    pub assigned_count: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PullRequestStatResponse {
    pub pull_request_id: String,
    pub pull_request_name: String,
    pub author_id: String,
    pub status: PrStatus,
    pub reviewer_count: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub reviewer_stats: Vec<ReviewerStatResponse>,
    pub pr_stats: Vec<PullRequestStatResponse>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: bool,
}

impl ReadinessResponse {
    pub fn from_checks(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            checks: HealthChecks {
                database: database_healthy,
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.checks.database
    }
}
