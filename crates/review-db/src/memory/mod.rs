//! In-memory implementation of every repository trait.
//!
//! All tables live behind a single `RwLock`, so each trait method is atomic
//! with respect to the others. State is lost when the store is dropped.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use review_core::entities::{
    PullRequest, PullRequestStat, ReviewerStat, Team, TeamMember, User, UserWithTeam,
};
use review_core::error::DomainError;
use review_core::traits::{
    PullRequestRepository, RepoResult, ReviewerRepository, StatsRepository, StorageHealth,
    TeamRepository, UserRepository,
};

#[derive(Debug, Clone)]
struct Assignment {
    pull_request_id: String,
    user_id: String,
}

#[derive(Debug, Default)]
struct Tables {
    teams: Vec<Team>,
    users: Vec<User>,
    pull_requests: Vec<PullRequest>,
    /// Kept in insertion order
    reviewers: Vec<Assignment>,
    last_id: i64,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }

    fn user(&self, user_id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.user_id == user_id)
    }

    fn pull_request(&self, pull_request_id: &str) -> Option<&PullRequest> {
        self.pull_requests
            .iter()
            .find(|p| p.pull_request_id == pull_request_id)
    }

    fn is_assigned(&self, pull_request_id: &str, user_id: &str) -> bool {
        self.reviewers
            .iter()
            .any(|a| a.pull_request_id == pull_request_id && a.user_id == user_id)
    }

    fn assign(&mut self, pull_request_id: &str, user_id: &str) {
        if !self.is_assigned(pull_request_id, user_id) {
            self.reviewers.push(Assignment {
                pull_request_id: pull_request_id.to_string(),
                user_id: user_id.to_string(),
            });
        }
    }

    fn remove(&mut self, pull_request_id: &str, user_id: &str) -> bool {
        let before = self.reviewers.len();
        self.reviewers
            .retain(|a| !(a.pull_request_id == pull_request_id && a.user_id == user_id));
        self.reviewers.len() != before
    }
}

/// Process-local store implementing the full storage contract.
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(Tables::default()),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TeamRepository for InMemoryStore {
    async fn exists(&self, name: &str) -> RepoResult<bool> {
        let tables = self.tables.read().await;
        Ok(tables.teams.iter().any(|t| t.name == name))
    }

    async fn create(&self, name: &str) -> RepoResult<Team> {
        let mut tables = self.tables.write().await;
        if tables.teams.iter().any(|t| t.name == name) {
            return Err(DomainError::TeamExists(name.to_string()));
        }
        let team = Team::new(tables.next_id(), name.to_string());
        tables.teams.push(team.clone());
        Ok(team)
    }

    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Team>> {
        let tables = self.tables.read().await;
        Ok(tables.teams.iter().find(|t| t.name == name).cloned())
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn exists(&self, user_id: &str) -> RepoResult<bool> {
        let tables = self.tables.read().await;
        Ok(tables.user(user_id).is_some())
    }

    async fn create(&self, member: &TeamMember, team_id: i64) -> RepoResult<()> {
        let mut tables = self.tables.write().await;
        if tables.user(&member.user_id).is_some() {
            return Err(DomainError::internal(format!(
                "user {} was created concurrently",
                member.user_id
            )));
        }
        let now = Utc::now();
        let id = tables.next_id();
        tables.users.push(User {
            id,
            user_id: member.user_id.clone(),
            username: member.username.clone(),
            team_id,
            is_active: member.is_active,
            created_at: now,
            updated_at: now,
        });
        Ok(())
    }

    async fn update(&self, member: &TeamMember, team_id: i64) -> RepoResult<()> {
        let mut tables = self.tables.write().await;
        let user = tables
            .users
            .iter_mut()
            .find(|u| u.user_id == member.user_id)
            .ok_or_else(|| DomainError::not_found("user", member.user_id.clone()))?;
        user.username.clone_from(&member.username);
        user.team_id = team_id;
        user.is_active = member.is_active;
        user.updated_at = Utc::now();
        Ok(())
    }

    async fn find_by_id(&self, user_id: &str) -> RepoResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables.user(user_id).cloned())
    }

    async fn find_with_team(&self, user_id: &str) -> RepoResult<Option<UserWithTeam>> {
        let tables = self.tables.read().await;
        let Some(user) = tables.user(user_id) else {
            return Ok(None);
        };
        let team = tables
            .teams
            .iter()
            .find(|t| t.id == user.team_id)
            .ok_or_else(|| DomainError::internal(format!("user {user_id} has no team")))?;
        Ok(Some(UserWithTeam {
            user_id: user.user_id.clone(),
            username: user.username.clone(),
            team_name: team.name.clone(),
            is_active: user.is_active,
        }))
    }

    async fn find_by_team(&self, team_id: i64) -> RepoResult<Vec<User>> {
        let tables = self.tables.read().await;
        Ok(tables
            .users
            .iter()
            .filter(|u| u.team_id == team_id)
            .cloned()
            .collect())
    }

    async fn find_active_by_team(&self, team_id: i64) -> RepoResult<Vec<User>> {
        let tables = self.tables.read().await;
        let mut users: Vec<User> = tables
            .users
            .iter()
            .filter(|u| u.team_id == team_id && u.is_active)
            .cloned()
            .collect();
        users.sort_by(|a, b| a.user_id.cmp(&b.user_id));
        Ok(users)
    }

    async fn set_active(&self, user_id: &str, is_active: bool) -> RepoResult<Option<User>> {
        let mut tables = self.tables.write().await;
        Ok(tables
            .users
            .iter_mut()
            .find(|u| u.user_id == user_id)
            .map(|user| {
                user.is_active = is_active;
                user.updated_at = Utc::now();
                user.clone()
            }))
    }
}

#[async_trait]
impl PullRequestRepository for InMemoryStore {
    async fn exists(&self, pull_request_id: &str) -> RepoResult<bool> {
        let tables = self.tables.read().await;
        Ok(tables.pull_request(pull_request_id).is_some())
    }

    async fn create(
        &self,
        pull_request_id: &str,
        name: &str,
        author_id: &str,
    ) -> RepoResult<PullRequest> {
        let mut tables = self.tables.write().await;
        if tables.user(author_id).is_none() {
            return Err(DomainError::not_found("author", author_id));
        }
        if tables.pull_request(pull_request_id).is_some() {
            return Err(DomainError::PrExists(pull_request_id.to_string()));
        }
        let pr = PullRequest::new(
            tables.next_id(),
            pull_request_id.to_string(),
            name.to_string(),
            author_id.to_string(),
        );
        tables.pull_requests.push(pr.clone());
        Ok(pr)
    }

    async fn find_by_id(&self, pull_request_id: &str) -> RepoResult<Option<PullRequest>> {
        let tables = self.tables.read().await;
        Ok(tables.pull_request(pull_request_id).cloned())
    }

    async fn merge(&self, pull_request_id: &str) -> RepoResult<Option<PullRequest>> {
        let mut tables = self.tables.write().await;
        Ok(tables
            .pull_requests
            .iter_mut()
            .find(|p| p.pull_request_id == pull_request_id)
            .map(|pr| {
                pr.merge(Utc::now());
                pr.clone()
            }))
    }

    async fn find_by_reviewer(&self, user_id: &str) -> RepoResult<Vec<PullRequest>> {
        let tables = self.tables.read().await;
        let mut prs: Vec<PullRequest> = tables
            .pull_requests
            .iter()
            .filter(|p| tables.is_assigned(&p.pull_request_id, user_id))
            .cloned()
            .collect();
        prs.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(prs)
    }
}

#[async_trait]
impl ReviewerRepository for InMemoryStore {
    async fn assign(&self, pull_request_id: &str, user_id: &str) -> RepoResult<()> {
        let mut tables = self.tables.write().await;
        if tables.pull_request(pull_request_id).is_none() || tables.user(user_id).is_none() {
            return Err(DomainError::not_found("pr or user", user_id));
        }
        tables.assign(pull_request_id, user_id);
        Ok(())
    }

    async fn remove(&self, pull_request_id: &str, user_id: &str) -> RepoResult<()> {
        let mut tables = self.tables.write().await;
        tables.remove(pull_request_id, user_id);
        Ok(())
    }

    async fn find_by_pull_request(&self, pull_request_id: &str) -> RepoResult<Vec<String>> {
        let tables = self.tables.read().await;
        Ok(tables
            .reviewers
            .iter()
            .filter(|a| a.pull_request_id == pull_request_id)
            .map(|a| a.user_id.clone())
            .collect())
    }

    async fn is_assigned(&self, pull_request_id: &str, user_id: &str) -> RepoResult<bool> {
        let tables = self.tables.read().await;
        Ok(tables.is_assigned(pull_request_id, user_id))
    }

    async fn replace(
        &self,
        pull_request_id: &str,
        old_user_id: &str,
        new_user_id: &str,
    ) -> RepoResult<()> {
        let mut tables = self.tables.write().await;
        let pr = tables
            .pull_request(pull_request_id)
            .ok_or_else(|| DomainError::not_found("pr", pull_request_id))?;
        if pr.is_merged() {
            return Err(DomainError::PrMerged(pull_request_id.to_string()));
        }
        if tables.user(new_user_id).is_none() {
            return Err(DomainError::not_found("user", new_user_id));
        }
        if !tables.remove(pull_request_id, old_user_id) {
            return Err(DomainError::NotAssigned {
                pr_id: pull_request_id.to_string(),
                reviewer_id: old_user_id.to_string(),
            });
        }
        tables.assign(pull_request_id, new_user_id);
        Ok(())
    }
}

#[async_trait]
impl StatsRepository for InMemoryStore {
    async fn reviewer_stats(&self) -> RepoResult<Vec<ReviewerStat>> {
        let tables = self.tables.read().await;
        let mut stats: Vec<ReviewerStat> = tables
            .users
            .iter()
            .map(|u| ReviewerStat {
                user_id: u.user_id.clone(),
                username: u.username.clone(),
                assigned_count: tables
                    .reviewers
                    .iter()
                    .filter(|a| a.user_id == u.user_id)
                    .count() as i64,
            })
            .collect();
        stats.sort_by(ReviewerStat::ranking);
        Ok(stats)
    }

    async fn pull_request_stats(&self) -> RepoResult<Vec<PullRequestStat>> {
        let tables = self.tables.read().await;
        let mut stats: Vec<PullRequestStat> = tables
            .pull_requests
            .iter()
            .map(|p| PullRequestStat {
                pull_request_id: p.pull_request_id.clone(),
                pull_request_name: p.name.clone(),
                author_id: p.author_id.clone(),
                status: p.status,
                reviewer_count: tables
                    .reviewers
                    .iter()
                    .filter(|a| a.pull_request_id == p.pull_request_id)
                    .count() as i64,
            })
            .collect();
        stats.sort_by(PullRequestStat::ranking);
        Ok(stats)
    }
}

#[async_trait]
impl StorageHealth for InMemoryStore {
    async fn ping(&self) -> RepoResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use review_core::PrStatus;

    async fn seeded() -> InMemoryStore {
        let store = InMemoryStore::new();
        let team = TeamRepository::create(&store, "backend").await.unwrap();
        for (id, active) in [("u1", true), ("u2", true), ("u3", true)] {
            UserRepository::create(&store, &TeamMember::new(id, id.to_uppercase(), active), team.id)
                .await
                .unwrap();
        }
        PullRequestRepository::create(&store, "pr-1", "Add search", "u1")
            .await
            .unwrap();
        store
    }

    #[tokio::test]
    async fn test_duplicate_team_rejected() {
        let store = seeded().await;
        let err = TeamRepository::create(&store, "backend").await.unwrap_err();
        assert_eq!(err, DomainError::TeamExists("backend".to_string()));
    }

    #[tokio::test]
    async fn test_assign_is_idempotent_and_ordered() {
        let store = seeded().await;
        store.assign("pr-1", "u3").await.unwrap();
        store.assign("pr-1", "u2").await.unwrap();
        store.assign("pr-1", "u3").await.unwrap();
        assert_eq!(store.find_by_pull_request("pr-1").await.unwrap(), ["u3", "u2"]);
    }

    #[tokio::test]
    async fn test_assign_unknown_user() {
        let store = seeded().await;
        let err = store.assign("pr-1", "ghost").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_replace_swaps_atomically() {
        let store = seeded().await;
        store.assign("pr-1", "u2").await.unwrap();
        store.replace("pr-1", "u2", "u3").await.unwrap();
        assert_eq!(store.find_by_pull_request("pr-1").await.unwrap(), ["u3"]);

        let err = store.replace("pr-1", "u2", "u1").await.unwrap_err();
        assert!(matches!(err, DomainError::NotAssigned { .. }));
        assert_eq!(store.find_by_pull_request("pr-1").await.unwrap(), ["u3"]);
    }

    #[tokio::test]
    async fn test_merge_keeps_first_timestamp() {
        let store = seeded().await;
        let first = store.merge("pr-1").await.unwrap().unwrap();
        let second = store.merge("pr-1").await.unwrap().unwrap();
        assert_eq!(first.status, PrStatus::Merged);
        assert_eq!(first.merged_at, second.merged_at);
        assert_eq!(first.updated_at, second.updated_at);
        assert!(store.merge("pr-404").await.unwrap().is_none());

        let err = store.replace("pr-1", "u2", "u3").await.unwrap_err();
        assert_eq!(err.code(), "PR_MERGED");
    }

    #[tokio::test]
    async fn test_active_members_sorted() {
        let store = seeded().await;
        store.set_active("u2", false).await.unwrap();
        let active: Vec<String> = store
            .find_active_by_team(1)
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.user_id)
            .collect();
        assert_eq!(active, ["u1", "u3"]);
    }

    #[tokio::test]
    async fn test_stats_sums_match() {
        let store = seeded().await;
        store.assign("pr-1", "u2").await.unwrap();
        store.assign("pr-1", "u3").await.unwrap();

        let reviewers = store.reviewer_stats().await.unwrap();
        let prs = store.pull_request_stats().await.unwrap();
        let total: i64 = reviewers.iter().map(|s| s.assigned_count).sum();
        assert_eq!(total, prs.iter().map(|s| s.reviewer_count).sum::<i64>());
        assert_eq!(reviewers.len(), 3);
        assert_eq!(reviewers[2].user_id, "u1");
        assert_eq!(reviewers[2].assigned_count, 0);
    }
}
