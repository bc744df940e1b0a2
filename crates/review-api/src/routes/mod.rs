//! Route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{health, pull_requests, stats, teams, users};
use crate::state::AppState;

/// Create the API router (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(team_routes())
        .merge(user_routes())
        .merge(pull_request_routes())
        .route("/stats", get(stats::get_stats))
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn team_routes() -> Router<AppState> {
    Router::new()
        .route("/team/add", post(teams::add_team))
        .route("/team/get", get(teams::get_team))
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/setIsActive", post(users::set_is_active))
        .route("/users/getReview", get(users::get_review))
}

fn pull_request_routes() -> Router<AppState> {
    Router::new()
        .route("/pullRequest/create", post(pull_requests::create_pull_request))
        .route("/pullRequest/merge", post(pull_requests::merge_pull_request))
        .route("/pullRequest/reassign", post(pull_requests::reassign_reviewer))
}
