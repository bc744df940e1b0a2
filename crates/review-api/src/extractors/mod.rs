//! Axum extractors for request handling
//!
//! Custom extractors for body validation and required query parameters.

mod query;
mod validated;

pub use query::QueryParams;
pub use validated::ValidatedJson;
