//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    CreatePullRequestRequest, CreateTeamRequest, MergePullRequestRequest,
    ReassignReviewerRequest, SetUserActiveRequest, TeamMemberRequest,
};

pub use responses::{
    HealthChecks, HealthResponse, PullRequestEnvelope, PullRequestResponse,
    PullRequestShortResponse, PullRequestStatResponse, ReadinessResponse, ReassignResponse,
    ReviewerStatResponse, StatsResponse, TeamEnvelope, TeamMemberResponse, TeamResponse,
    UserEnvelope, UserResponse, UserReviewsResponse,
};
