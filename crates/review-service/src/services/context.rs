//! Service context - dependency container for services
//!
//! Holds one handle per storage capability. Handles may point at the same
//! backing object (the in-memory store implements every trait) or at separate
//! PostgreSQL repositories sharing a pool.

use std::sync::Arc;

use review_core::traits::{
    PullRequestRepository, ReviewerRepository, StatsRepository, StorageHealth, TeamRepository,
    UserRepository,
};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    team_repo: Arc<dyn TeamRepository>,
    user_repo: Arc<dyn UserRepository>,
    pull_request_repo: Arc<dyn PullRequestRepository>,
    reviewer_repo: Arc<dyn ReviewerRepository>,
    stats_repo: Arc<dyn StatsRepository>,
    health: Arc<dyn StorageHealth>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        team_repo: Arc<dyn TeamRepository>,
        user_repo: Arc<dyn UserRepository>,
        pull_request_repo: Arc<dyn PullRequestRepository>,
        reviewer_repo: Arc<dyn ReviewerRepository>,
        stats_repo: Arc<dyn StatsRepository>,
        health: Arc<dyn StorageHealth>,
    ) -> Self {
        Self {
            team_repo,
            user_repo,
            pull_request_repo,
            reviewer_repo,
            stats_repo,
            health,
        }
    }

    /// Create a context where every capability is served by one store
    pub fn from_store<S>(store: Arc<S>) -> Self
    where
        S: TeamRepository
            + UserRepository
            + PullRequestRepository
            + ReviewerRepository
            + StatsRepository
            + StorageHealth
            + 'static,
    {
        Self::new(
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            store,
        )
    }

    // === Repositories ===

    /// Get the team repository
    pub fn team_repo(&self) -> &dyn TeamRepository {
        self.team_repo.as_ref()
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the pull request repository
    pub fn pull_request_repo(&self) -> &dyn PullRequestRepository {
        self.pull_request_repo.as_ref()
    }

    /// Get the reviewer assignment repository
    pub fn reviewer_repo(&self) -> &dyn ReviewerRepository {
        self.reviewer_repo.as_ref()
    }

    /// Get the statistics repository
    pub fn stats_repo(&self) -> &dyn StatsRepository {
        self.stats_repo.as_ref()
    }

    /// Get the storage health probe
    pub fn health(&self) -> &dyn StorageHealth {
        self.health.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with individually substituted repositories
#[derive(Default)]
pub struct ServiceContextBuilder {
    team_repo: Option<Arc<dyn TeamRepository>>,
    user_repo: Option<Arc<dyn UserRepository>>,
    pull_request_repo: Option<Arc<dyn PullRequestRepository>>,
    reviewer_repo: Option<Arc<dyn ReviewerRepository>>,
    stats_repo: Option<Arc<dyn StatsRepository>>,
    health: Option<Arc<dyn StorageHealth>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn team_repo(mut self, repo: Arc<dyn TeamRepository>) -> Self {
        self.team_repo = Some(repo);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn pull_request_repo(mut self, repo: Arc<dyn PullRequestRepository>) -> Self {
        self.pull_request_repo = Some(repo);
        self
    }

    pub fn reviewer_repo(mut self, repo: Arc<dyn ReviewerRepository>) -> Self {
        self.reviewer_repo = Some(repo);
        self
    }

    pub fn stats_repo(mut self, repo: Arc<dyn StatsRepository>) -> Self {
        self.stats_repo = Some(repo);
        self
    }

    pub fn health(mut self, health: Arc<dyn StorageHealth>) -> Self {
        self.health = Some(health);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.team_repo
                .ok_or_else(|| ServiceError::validation("team_repo is required"))?,
            self.user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.pull_request_repo
                .ok_or_else(|| ServiceError::validation("pull_request_repo is required"))?,
            self.reviewer_repo
                .ok_or_else(|| ServiceError::validation("reviewer_repo is required"))?,
            self.stats_repo
                .ok_or_else(|| ServiceError::validation("stats_repo is required"))?,
            self.health
                .ok_or_else(|| ServiceError::validation("health is required"))?,
        ))
    }
}
