//! Middleware stack for the API server
//!
//! Provides logging, request ID generation, CORS, timeout and rate limiting.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{header, HeaderValue, Method, Request, StatusCode},
    Router,
};
use review_common::{CorsConfig, RateLimitConfig};
use tower::ServiceBuilder;
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::GlobalKeyExtractor, GovernorLayer,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{info, warn, Level};

use crate::state::AppState;

/// Header name for request ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Apply global rate limiting when enabled
///
/// Uses a single bucket for all clients. Health routes should be merged after
/// this layer so probes are never throttled.
pub fn apply_rate_limit(router: Router<AppState>, config: &RateLimitConfig) -> Router<AppState> {
    if !config.enabled {
        return router;
    }

    let replenish_ms = (1000 / u64::from(config.requests_per_second.max(1))).max(1);
    let Some(governor_conf) = GovernorConfigBuilder::default()
        .per_millisecond(replenish_ms)
        .burst_size(config.burst.max(1))
        .key_extractor(GlobalKeyExtractor)
        .finish()
    else {
        warn!("Invalid rate limit configuration, rate limiting disabled");
        return router;
    };

    info!(
        requests_per_second = config.requests_per_second,
        burst = config.burst,
        "Rate limiting enabled"
    );

    router.layer(GovernorLayer {
        config: Arc::new(governor_conf),
    })
}

/// Apply the common middleware stack
///
/// Request -> RequestID -> Trace -> Timeout -> CORS -> Handler
pub fn apply_middleware(
    router: Router<AppState>,
    cors_config: &CorsConfig,
    request_timeout: Duration,
    is_production: bool,
) -> Router<AppState> {
    router.layer(
        ServiceBuilder::new()
            // Request ID
            .layer(SetRequestIdLayer::new(
                header::HeaderName::from_static(REQUEST_ID_HEADER),
                MakeRequestUuid,
            ))
            .layer(PropagateRequestIdLayer::new(header::HeaderName::from_static(
                REQUEST_ID_HEADER,
            )))
            // Tracing
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(|request: &Request<Body>| {
                        let request_id = request
                            .headers()
                            .get(REQUEST_ID_HEADER)
                            .and_then(|v| v.to_str().ok())
                            .unwrap_or("unknown");

                        tracing::info_span!(
                            "http_request",
                            method = %request.method(),
                            uri = %request.uri(),
                            request_id = %request_id,
                        )
                    })
                    .on_request(DefaultOnRequest::new().level(Level::INFO))
                    .on_response(DefaultOnResponse::new().level(Level::INFO)),
            )
            // Timeout (returns 503 Service Unavailable on timeout)
            .layer(TimeoutLayer::with_status_code(
                StatusCode::SERVICE_UNAVAILABLE,
                request_timeout,
            ))
            .layer(create_cors_layer(cors_config, is_production)),
    )
}

/// Create CORS layer from configuration
fn create_cors_layer(config: &CorsConfig, is_production: bool) -> CorsLayer {
    let base_layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::HeaderName::from_static(REQUEST_ID_HEADER),
        ])
        .expose_headers([header::HeaderName::from_static(REQUEST_ID_HEADER)]);

    if !is_production && config.allowed_origins.is_empty() {
        warn!("CORS: Allowing any origin (development mode). Configure CORS_ALLOWED_ORIGINS for production.");
        return base_layer.allow_origin(Any);
    }

    if config.allowed_origins.is_empty() {
        warn!("CORS: No allowed origins configured in production mode. Requests from browsers will be blocked.");
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| {
            origin.parse::<HeaderValue>().ok().or_else(|| {
                warn!(origin = %origin, "Invalid CORS origin");
                None
            })
        })
        .collect();

    info!("CORS: Allowing {} configured origins", origins.len());
    base_layer.allow_origin(AllowOrigin::list(origins))
}
