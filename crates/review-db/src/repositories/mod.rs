//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in review-core.
//! Each repository handles database operations for a single table or relation.

mod error;
mod health;
mod pull_request;
mod reviewer;
mod stats;
mod team;
mod user;

pub use health::PgHealthCheck;
pub use pull_request::PgPullRequestRepository;
pub use reviewer::PgReviewerRepository;
pub use stats::PgStatsRepository;
pub use team::PgTeamRepository;
pub use user::PgUserRepository;
