//! Statistics handler

use axum::{extract::State, Json};
use review_service::dto::StatsResponse;
use review_service::StatsService;

use crate::response::ApiResult;
use crate::state::AppState;

/// Assignment statistics
///
/// GET /stats
pub async fn get_stats(State(state): State<AppState>) -> ApiResult<Json<StatsResponse>> {
    let service = StatsService::new(state.service_context());
    Ok(Json(service.get_stats().await?))
}
