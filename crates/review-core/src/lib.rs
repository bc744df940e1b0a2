//! # review-core
//!
//! Domain layer containing entities, the PR status value object, repository traits,
//! and the reviewer selection policy.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod policy;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    PullRequest, PullRequestStat, PullRequestWithReviewers, ReviewerStat, Team, TeamMember,
    TeamWithMembers, User, UserWithTeam,
};
pub use error::DomainError;
pub use policy::{initial_reviewers, pick_replacement, MAX_REVIEWERS};
pub use traits::{
    PullRequestRepository, RepoResult, ReviewerRepository, StatsRepository, StorageHealth,
    TeamRepository, UserRepository,
};
pub use value_objects::{PrStatus, PrStatusParseError};
