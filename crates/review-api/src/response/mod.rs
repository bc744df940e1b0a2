//! Response types and error handling for API endpoints
//!
//! Every failure is rendered as `{"error": {"code", "message", "details"?}}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use review_common::ErrorResponse;
use review_core::DomainError;
use review_service::ServiceError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

/// API error type for consistent error responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Service(#[from] ServiceError),

    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("missing query parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid query parameter: {0}")]
    InvalidQuery(String),
}

fn domain_status(err: &DomainError) -> StatusCode {
    match err {
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::TeamExists(_) => StatusCode::BAD_REQUEST,
        DomainError::PrExists(_)
        | DomainError::PrMerged(_)
        | DomainError::NotAssigned { .. }
        | DomainError::NoCandidate(_) => StatusCode::CONFLICT,
        DomainError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ApiError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Service(ServiceError::Domain(e)) | Self::Domain(e) => domain_status(e),
            Self::Service(ServiceError::Validation(_))
            | Self::Validation(_)
            | Self::InvalidBody(_)
            | Self::MissingParameter(_)
            | Self::InvalidQuery(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Service(e) => e.error_code(),
            Self::Domain(e) => e.code(),
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidBody(_) => "INVALID_REQUEST_BODY",
            Self::MissingParameter(_) => "MISSING_PARAMETER",
            Self::InvalidQuery(_) => "INVALID_QUERY_PARAMETER",
        }
    }

    /// Create an invalid body error
    pub fn invalid_body(msg: impl Into<String>) -> Self {
        Self::InvalidBody(msg.into())
    }

    /// Create an invalid query error
    pub fn invalid_query(msg: impl Into<String>) -> Self {
        Self::InvalidQuery(msg.into())
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            Self::Validation(errors) => serde_json::to_value(errors).ok(),
            _ => None,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorResponse,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            error!(error = ?self, "Server error occurred");
        }

        let mut body = ErrorResponse::new(self.error_code(), self.to_string());
        if let Some(details) = self.details() {
            body = body.with_details(details);
        }

        (status, Json(ErrorBody { error: body })).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

/// Created response (201) with JSON body
pub struct Created<T>(pub T);

impl<T: IntoResponse> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        let mut response = self.0.into_response();
        *response.status_mut() = StatusCode::CREATED;
        response
    }
}
