//! Statistics service

use review_core::entities::{PullRequestStat, ReviewerStat};
use tracing::instrument;

use crate::dto::{PullRequestStatResponse, ReviewerStatResponse, StatsResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Statistics service
pub struct StatsService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> StatsService<'a> {
    /// Create a new StatsService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Assignment counts per reviewer and per pull request, computed fresh.
    ///
    /// Both lists are ordered by count descending, ties by id ascending.
    #[instrument(skip(self))]
    pub async fn get_stats(&self) -> ServiceResult<StatsResponse> {
        let mut reviewers = self.ctx.stats_repo().reviewer_stats().await?;
        let mut prs = self.ctx.stats_repo().pull_request_stats().await?;

        reviewers.sort_by(ReviewerStat::ranking);
        prs.sort_by(PullRequestStat::ranking);

        Ok(StatsResponse {
            reviewer_stats: reviewers.into_iter().map(ReviewerStatResponse::from).collect(),
            pr_stats: prs.into_iter().map(PullRequestStatResponse::from).collect(),
        })
    }
}
