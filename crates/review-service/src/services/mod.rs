//! Business logic services
//!
//! Each service borrows the shared [`ServiceContext`] for the duration of a
//! single operation.

pub mod context;
pub mod error;
pub mod pull_request;
pub mod stats;
pub mod team;
pub mod user;

// Re-export all services for convenience
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use pull_request::PullRequestService;
pub use stats::StatsService;
pub use team::TeamService;
pub use user::UserService;
