//! Test fixtures and data generators
//!
//! Request bodies with unique identifiers (so runs against a shared database
//! never collide) and typed views of the API responses.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> String {
    format!(
        "{}-{}",
        std::process::id(),
        COUNTER.fetch_add(1, Ordering::SeqCst)
    )
}

// ============================================================================
// Requests
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct MemberRequest {
    pub user_id: String,
    pub username: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct AddTeamRequest {
    pub team_name: String,
    pub members: Vec<MemberRequest>,
}

/// A team whose member ids share one suffix, so their relative order is
/// the order of the given labels.
#[derive(Debug, Clone)]
pub struct TeamFixture {
    pub request: AddTeamRequest,
    suffix: String,
}

impl TeamFixture {
    /// Build a team from `(label, is_active)` pairs
    pub fn new(members: &[(&str, bool)]) -> Self {
        let suffix = unique_suffix();
        let members = members
            .iter()
            .map(|(label, is_active)| MemberRequest {
                user_id: format!("{label}-{suffix}"),
                username: format!("User {label}"),
                is_active: *is_active,
            })
            .collect();

        Self {
            request: AddTeamRequest {
                team_name: format!("team-{suffix}"),
                members,
            },
            suffix,
        }
    }

    /// Team of active members
    pub fn active(labels: &[&str]) -> Self {
        let members: Vec<_> = labels.iter().map(|l| (*l, true)).collect();
        Self::new(&members)
    }

    pub fn name(&self) -> &str {
        &self.request.team_name
    }

    /// Full id for a label (member user id or a PR id scoped to this fixture)
    pub fn id(&self, label: &str) -> String {
        format!("{label}-{}", self.suffix)
    }
}

#[derive(Debug, Serialize)]
pub struct SetIsActiveRequest {
    pub user_id: String,
    pub is_active: bool,
}

#[derive(Debug, Serialize)]
pub struct CreatePrRequest {
    pub pull_request_id: String,
    pub pull_request_name: String,
    pub author_id: String,
}

impl CreatePrRequest {
    pub fn new(pull_request_id: &str, author_id: &str) -> Self {
        Self {
            pull_request_id: pull_request_id.to_string(),
            pull_request_name: format!("Change {pull_request_id}"),
            author_id: author_id.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MergePrRequest {
    pub pull_request_id: String,
}

#[derive(Debug, Serialize)]
pub struct ReassignRequest {
    pub pull_request_id: String,
    pub old_user_id: String,
}

// ============================================================================
// Responses
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct MemberResponse {
    pub user_id: String,
    pub username: String,
    pub is_active: bool,
}

#[derive(Debug, Deserialize)]
pub struct TeamResponse {
    pub team_name: String,
    pub members: Vec<MemberResponse>,
}

#[derive(Debug, Deserialize)]
pub struct TeamEnvelope {
    pub team: TeamResponse,
}

#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub user_id: String,
    pub username: String,
    pub team_name: String,
    pub is_active: bool,
}

#[derive(Debug, Deserialize)]
pub struct UserEnvelope {
    pub user: UserResponse,
}

#[derive(Debug, Deserialize)]
pub struct PrResponse {
    pub pull_request_id: String,
    pub pull_request_name: String,
    pub author_id: String,
    pub status: String,
    pub assigned_reviewers: Vec<String>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
    #[serde(rename = "mergedAt")]
    pub merged_at: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PrEnvelope {
    pub pr: PrResponse,
}

#[derive(Debug, Deserialize)]
pub struct ReassignResponse {
    pub pr: PrResponse,
    pub replaced_by: String,
}

#[derive(Debug, Deserialize)]
pub struct PrShortResponse {
    pub pull_request_id: String,
    pub pull_request_name: String,
    pub author_id: String,
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct ReviewsResponse {
    pub user_id: String,
    pub pull_requests: Vec<PrShortResponse>,
}

#[derive(Debug, Deserialize)]
pub struct ReviewerStat {
    pub user_id: String,
    pub username: String,
    pub assigned_count: i64,
}

#[derive(Debug, Deserialize)]
pub struct PrStat {
    pub pull_request_id: String,
    pub reviewer_count: i64,
}

#[derive(Debug, Deserialize)]
pub struct StatsResponse {
    pub reviewer_stats: Vec<ReviewerStat>,
    pub pr_stats: Vec<PrStat>,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}
