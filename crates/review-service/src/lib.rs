//! # review-service
//!
//! Application layer: the assignment engine that enforces team, user and
//! pull request rules on top of the repository traits, plus the DTOs it
//! exchanges with the HTTP layer.

pub mod dto;
pub mod services;

pub use services::{
    PullRequestService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
    StatsService, TeamService, UserService,
};
