//! Pull request service
//!
//! Creation with automatic reviewer assignment, idempotent merge, and
//! reviewer reassignment.

use review_core::entities::{PullRequest, PullRequestWithReviewers};
use review_core::{initial_reviewers, pick_replacement, DomainError, MAX_REVIEWERS};
use tracing::{info, instrument, warn};

use crate::dto::{
    CreatePullRequestRequest, MergePullRequestRequest, PullRequestResponse,
    ReassignReviewerRequest, ReassignResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Pull request service
pub struct PullRequestService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PullRequestService<'a> {
    /// Create a new PullRequestService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create an OPEN pull request and assign up to two reviewers from the
    /// author's team.
    ///
    /// A candidate whose assignment fails is skipped and does not use a slot.
    #[instrument(skip(self, request), fields(pull_request_id = %request.pull_request_id, author_id = %request.author_id))]
    pub async fn create(
        &self,
        request: CreatePullRequestRequest,
    ) -> ServiceResult<PullRequestResponse> {
        let author = self
            .ctx
            .user_repo()
            .find_by_id(&request.author_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("author", request.author_id.as_str()))?;

        if self
            .ctx
            .pull_request_repo()
            .exists(&request.pull_request_id)
            .await?
        {
            return Err(DomainError::PrExists(request.pull_request_id).into());
        }

        let pr = self
            .ctx
            .pull_request_repo()
            .create(
                &request.pull_request_id,
                &request.pull_request_name,
                &request.author_id,
            )
            .await?;

        let pool = self
            .ctx
            .user_repo()
            .find_active_by_team(author.team_id)
            .await?;

        let mut assigned = Vec::with_capacity(MAX_REVIEWERS);
        for candidate in initial_reviewers(&pool, &author.user_id) {
            if assigned.len() == MAX_REVIEWERS {
                break;
            }
            match self
                .ctx
                .reviewer_repo()
                .assign(&pr.pull_request_id, &candidate)
                .await
            {
                Ok(()) => assigned.push(candidate),
                Err(e) => warn!(reviewer_id = %candidate, error = %e, "Skipping reviewer"),
            }
        }

        info!(reviewers = ?assigned, "Pull request created");
        Ok(PullRequestResponse::from(PullRequestWithReviewers::new(
            pr, assigned,
        )))
    }

    /// Merge a pull request. Merging an already merged PR returns it unchanged.
    #[instrument(skip(self, request), fields(pull_request_id = %request.pull_request_id))]
    pub async fn merge(&self, request: MergePullRequestRequest) -> ServiceResult<PullRequestResponse> {
        let pr_id = request.pull_request_id.as_str();
        let pr = self.find(pr_id).await?;

        let pr = if pr.is_merged() {
            pr
        } else {
            let merged = self
                .ctx
                .pull_request_repo()
                .merge(pr_id)
                .await?
                .ok_or_else(|| ServiceError::not_found("pr", pr_id))?;
            info!("Pull request merged");
            merged
        };

        let reviewers = self.ctx.reviewer_repo().find_by_pull_request(pr_id).await?;
        Ok(PullRequestResponse::from(PullRequestWithReviewers::new(
            pr, reviewers,
        )))
    }

    /// Replace one reviewer with the first eligible active member of that
    /// reviewer's current team.
    #[instrument(skip(self, request), fields(pull_request_id = %request.pull_request_id, old_user_id = %request.old_user_id))]
    pub async fn reassign(
        &self,
        request: ReassignReviewerRequest,
    ) -> ServiceResult<ReassignResponse> {
        let pr_id = request.pull_request_id.as_str();
        let old_id = request.old_user_id.as_str();

        let pr = self.find(pr_id).await?;
        if pr.is_merged() {
            return Err(DomainError::PrMerged(pr_id.to_string()).into());
        }

        let reviewers = self.ctx.reviewer_repo().find_by_pull_request(pr_id).await?;
        let current = PullRequestWithReviewers::new(pr, reviewers);
        if !current.has_reviewer(old_id) {
            return Err(DomainError::NotAssigned {
                pr_id: pr_id.to_string(),
                reviewer_id: old_id.to_string(),
            }
            .into());
        }

        let old_reviewer = self
            .ctx
            .user_repo()
            .find_by_id(old_id)
            .await?
            .ok_or_else(|| ServiceError::internal(format!("assigned reviewer {old_id} has no user record")))?;

        let pool = self
            .ctx
            .user_repo()
            .find_active_by_team(old_reviewer.team_id)
            .await?;

        let author_id = &current.pull_request.author_id;
        let replacement = pick_replacement(&pool, author_id, &current.reviewers)
            .ok_or_else(|| DomainError::NoCandidate(pr_id.to_string()))?;

        self.ctx
            .reviewer_repo()
            .replace(pr_id, old_id, &replacement)
            .await?;

        info!(replaced_by = %replacement, "Reviewer reassigned");

        let reviewers = self.ctx.reviewer_repo().find_by_pull_request(pr_id).await?;
        Ok(ReassignResponse {
            pr: PullRequestResponse::from(PullRequestWithReviewers::new(
                current.pull_request,
                reviewers,
            )),
            replaced_by: replacement,
        })
    }

    async fn find(&self, pr_id: &str) -> ServiceResult<PullRequest> {
        self.ctx
            .pull_request_repo()
            .find_by_id(pr_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("pr", pr_id))
    }
}
