//! Query string extractor
//!
//! Exposes raw query parameters and reports absent or empty required ones as
//! `MISSING_PARAMETER`.

use std::collections::HashMap;

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};

use crate::response::{ApiError, ApiResult};

/// Raw query parameters of a request
#[derive(Debug, Clone, Default)]
pub struct QueryParams(HashMap<String, String>);

impl QueryParams {
    /// Get a required, non-empty parameter
    pub fn require(&self, name: &'static str) -> ApiResult<&str> {
        self.0
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
            .ok_or(ApiError::MissingParameter(name))
    }
}

impl From<HashMap<String, String>> for QueryParams {
    fn from(params: HashMap<String, String>) -> Self {
        Self(params)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for QueryParams
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.body_text()))?;

        Ok(Self(params))
    }
}
