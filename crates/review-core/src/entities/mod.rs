//! Domain entities - core business objects

mod pull_request;
mod stats;
mod team;
mod user;

pub use pull_request::{PullRequest, PullRequestWithReviewers};
pub use stats::{PullRequestStat, ReviewerStat};
pub use team::{Team, TeamWithMembers};
pub use user::{TeamMember, User, UserWithTeam};
