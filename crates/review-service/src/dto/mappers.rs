//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use chrono::{DateTime, SecondsFormat, Utc};

use review_core::entities::{
    PullRequest, PullRequestStat, PullRequestWithReviewers, ReviewerStat, TeamMember,
    TeamWithMembers, UserWithTeam,
};

use super::responses::{
    PullRequestResponse, PullRequestShortResponse, PullRequestStatResponse, ReviewerStatResponse,
    TeamMemberResponse, TeamResponse, UserResponse,
};

/// RFC 3339 in UTC with second precision, e.g. `2024-01-02T03:04:05Z`
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

// ============================================================================
// Team Mappers
// ============================================================================

impl From<&TeamMember> for TeamMemberResponse {
    fn from(member: &TeamMember) -> Self {
        Self {
            user_id: member.user_id.clone(),
            username: member.username.clone(),
            is_active: member.is_active,
        }
    }
}

impl From<TeamWithMembers> for TeamResponse {
    fn from(team: TeamWithMembers) -> Self {
        Self {
            members: team.members.iter().map(TeamMemberResponse::from).collect(),
            team_name: team.team.name,
        }
    }
}

// ============================================================================
// User Mappers
// ============================================================================

impl From<UserWithTeam> for UserResponse {
    fn from(user: UserWithTeam) -> Self {
        Self {
            user_id: user.user_id,
            username: user.username,
            team_name: user.team_name,
            is_active: user.is_active,
        }
    }
}

// ============================================================================
// Pull Request Mappers
// ============================================================================

impl From<PullRequestWithReviewers> for PullRequestResponse {
    fn from(value: PullRequestWithReviewers) -> Self {
        let pr = value.pull_request;
        Self {
            pull_request_id: pr.pull_request_id,
            pull_request_name: pr.name,
            author_id: pr.author_id,
            status: pr.status,
            assigned_reviewers: value.reviewers,
            created_at: Some(format_timestamp(pr.created_at)),
            merged_at: pr.merged_at.map(format_timestamp),
        }
    }
}

impl From<PullRequest> for PullRequestShortResponse {
    fn from(pr: PullRequest) -> Self {
        Self {
            pull_request_id: pr.pull_request_id,
            pull_request_name: pr.name,
            author_id: pr.author_id,
            status: pr.status,
        }
    }
}

// ============================================================================
// Stats Mappers
// ============================================================================

impl From<ReviewerStat> for ReviewerStatResponse {
    fn from(stat: ReviewerStat) -> Self {
        Self {
            user_id: stat.user_id,
            username: stat.username,
            assigned_count: stat.assigned_count,
        }
    }
}

impl From<PullRequestStat> for PullRequestStatResponse {
    fn from(stat: PullRequestStat) -> Self {
        Self {
            pull_request_id: stat.pull_request_id,
            pull_request_name: stat.pull_request_name,
            author_id: stat.author_id,
            status: stat.status,
            reviewer_count: stat.reviewer_count,
        }
    }
}
