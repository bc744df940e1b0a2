//! Pull request entity <-> model mapper

use review_core::entities::PullRequest;
use review_core::{DomainError, PrStatus};

use crate::models::PullRequestModel;

/// Parse a stored status column
pub(crate) fn parse_status(raw: &str) -> Result<PrStatus, DomainError> {
    raw.parse().map_err(DomainError::internal)
}

impl TryFrom<PullRequestModel> for PullRequest {
    type Error = DomainError;

    fn try_from(model: PullRequestModel) -> Result<Self, Self::Error> {
        Ok(PullRequest {
            id: model.id,
            status: parse_status(&model.status)?,
            pull_request_id: model.pull_request_id,
            name: model.pull_request_name,
            author_id: model.author_id,
            created_at: model.created_at,
            merged_at: model.merged_at,
            updated_at: model.updated_at,
        })
    }
}
