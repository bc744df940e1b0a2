//! Repository traits (ports) - define the interface for data access
//!
//! One narrow trait per stored concept. The assignment services compose them
//! through a context object, so each can be substituted independently.

use async_trait::async_trait;

use crate::entities::{
    PullRequest, PullRequestStat, ReviewerStat, Team, TeamMember, User, UserWithTeam,
};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Team Repository
// ============================================================================

#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Check if a team name is taken
    async fn exists(&self, name: &str) -> RepoResult<bool>;

    /// Create a new team, failing with `TeamExists` on a duplicate name
    async fn create(&self, name: &str) -> RepoResult<Team>;

    /// Find team by name
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Team>>;
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Check if an external user id is known
    async fn exists(&self, user_id: &str) -> RepoResult<bool>;

    /// Create a user under a team
    async fn create(&self, member: &TeamMember, team_id: i64) -> RepoResult<()>;

    /// Overwrite name, team and active flag of an existing user
    async fn update(&self, member: &TeamMember, team_id: i64) -> RepoResult<()>;

    /// Find user by external id
    async fn find_by_id(&self, user_id: &str) -> RepoResult<Option<User>>;

    /// Find user with its team name resolved
    async fn find_with_team(&self, user_id: &str) -> RepoResult<Option<UserWithTeam>>;

    /// List all members of a team in insertion order
    async fn find_by_team(&self, team_id: i64) -> RepoResult<Vec<User>>;

    /// List active members of a team
    async fn find_active_by_team(&self, team_id: i64) -> RepoResult<Vec<User>>;

    /// Set the active flag, returning the updated user or `None` if unknown
    async fn set_active(&self, user_id: &str, is_active: bool) -> RepoResult<Option<User>>;
}

// ============================================================================
// Pull Request Repository
// ============================================================================

#[async_trait]
pub trait PullRequestRepository: Send + Sync {
    /// Check if a PR id is taken
    async fn exists(&self, pull_request_id: &str) -> RepoResult<bool>;

    /// Persist a new OPEN pull request, failing with `PrExists` on a duplicate id
    async fn create(
        &self,
        pull_request_id: &str,
        name: &str,
        author_id: &str,
    ) -> RepoResult<PullRequest>;

    /// Find pull request by external id
    async fn find_by_id(&self, pull_request_id: &str) -> RepoResult<Option<PullRequest>>;

    /// Transition an OPEN pull request to MERGED.
    ///
    /// Returns `None` when the PR is unknown. An already merged PR is
    /// returned unchanged.
    async fn merge(&self, pull_request_id: &str) -> RepoResult<Option<PullRequest>>;

    /// List pull requests on which the user is currently a reviewer
    async fn find_by_reviewer(&self, user_id: &str) -> RepoResult<Vec<PullRequest>>;
}

// ============================================================================
// Reviewer Repository
// ============================================================================

#[async_trait]
pub trait ReviewerRepository: Send + Sync {
    /// Assign a reviewer; assigning the same pair twice is a no-op
    async fn assign(&self, pull_request_id: &str, user_id: &str) -> RepoResult<()>;

    /// Remove a reviewer assignment
    async fn remove(&self, pull_request_id: &str, user_id: &str) -> RepoResult<()>;

    /// List current reviewers in assignment order
    async fn find_by_pull_request(&self, pull_request_id: &str) -> RepoResult<Vec<String>>;

    /// Check if a user is currently assigned
    async fn is_assigned(&self, pull_request_id: &str, user_id: &str) -> RepoResult<bool>;

    /// Swap `old_user_id` for `new_user_id` on an OPEN pull request.
    ///
    /// Either both changes are applied or neither is. Fails with `PrMerged`
    /// or `NotAssigned` if the state changed since it was last read.
    async fn replace(
        &self,
        pull_request_id: &str,
        old_user_id: &str,
        new_user_id: &str,
    ) -> RepoResult<()>;
}

// ============================================================================
// Stats Repository
// ============================================================================

#[async_trait]
pub trait StatsRepository: Send + Sync {
    /// Current assignment count for every user, zero included
    async fn reviewer_stats(&self) -> RepoResult<Vec<ReviewerStat>>;

    /// Current reviewer count for every pull request
    async fn pull_request_stats(&self) -> RepoResult<Vec<PullRequestStat>>;
}

// ============================================================================
// Health
// ============================================================================

#[async_trait]
pub trait StorageHealth: Send + Sync {
    /// Round-trip to the backing store
    async fn ping(&self) -> RepoResult<()>;
}
