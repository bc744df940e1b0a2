//! Storage gateway contract

mod repositories;

pub use repositories::{
    PullRequestRepository, RepoResult, ReviewerRepository, StatsRepository, StorageHealth,
    TeamRepository, UserRepository,
};
