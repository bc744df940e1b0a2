//! Integration test utilities for the review service
//!
//! This crate provides helpers for running end-to-end tests against
//! the REST API, backed either by the in-memory store or PostgreSQL.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
