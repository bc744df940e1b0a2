//! Database models - SQLx-compatible structs for PostgreSQL tables

mod pull_request;
mod stats;
mod team;
mod user;

pub use pull_request::PullRequestModel;
pub use stats::{PullRequestStatModel, ReviewerStatModel};
pub use team::TeamModel;
pub use user::{UserModel, UserWithTeamModel};
