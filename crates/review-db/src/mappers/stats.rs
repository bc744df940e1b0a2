//! Statistics row mappers

use review_core::entities::{PullRequestStat, ReviewerStat};
use review_core::DomainError;

use super::parse_status;
use crate::models::{PullRequestStatModel, ReviewerStatModel};

impl From<ReviewerStatModel> for ReviewerStat {
    fn from(model: ReviewerStatModel) -> Self {
        ReviewerStat {
            user_id: model.user_id,
            username: model.username,
            assigned_count: model.assigned_count,
        }
    }
}

impl TryFrom<PullRequestStatModel> for PullRequestStat {
    type Error = DomainError;

    fn try_from(model: PullRequestStatModel) -> Result<Self, Self::Error> {
        Ok(PullRequestStat {
            status: parse_status(&model.status)?,
            pull_request_id: model.pull_request_id,
            pull_request_name: model.pull_request_name,
            author_id: model.author_id,
            reviewer_count: model.reviewer_count,
        })
    }
}
