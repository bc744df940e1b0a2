//! Server setup and initialization
//!
//! Provides the application builder, PostgreSQL wiring and the server runner.

use std::sync::Arc;

use axum::Router;
use review_common::{AppConfig, AppError, AppResult};
use review_db::{
    create_pool_with_retry, ensure_schema_with_retry, DatabaseConfig, PgHealthCheck, PgPool,
    PgPullRequestRepository, PgReviewerRepository, PgStatsRepository, PgTeamRepository,
    PgUserRepository,
};
use review_service::ServiceContext;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_middleware, apply_rate_limit};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let router = apply_rate_limit(create_router(), &config.rate_limit).merge(health_routes());
    let router = apply_middleware(
        router,
        &config.cors,
        config.app.request_timeout(),
        config.app.env.is_production(),
    );
    router.with_state(state)
}

/// Connect to PostgreSQL and make sure the schema exists
///
/// Both steps retry with linear back-off before giving up.
pub async fn connect_database(config: &AppConfig) -> AppResult<PgPool> {
    let db_config = DatabaseConfig::from(&config.database);

    info!("Connecting to PostgreSQL...");
    let pool = create_pool_with_retry(&db_config)
        .await
        .map_err(AppError::database)?;

    ensure_schema_with_retry(&pool, &db_config)
        .await
        .map_err(AppError::database)?;
    info!("PostgreSQL connection established, schema ready");

    Ok(pool)
}

/// Service context backed by PostgreSQL repositories sharing one pool
pub fn postgres_context(pool: PgPool) -> ServiceContext {
    ServiceContext::new(
        Arc::new(PgTeamRepository::new(pool.clone())),
        Arc::new(PgUserRepository::new(pool.clone())),
        Arc::new(PgPullRequestRepository::new(pool.clone())),
        Arc::new(PgReviewerRepository::new(pool.clone())),
        Arc::new(PgStatsRepository::new(pool.clone())),
        Arc::new(PgHealthCheck::new(pool)),
    )
}

/// Serve the application until Ctrl-C or SIGTERM
pub async fn run_server(listener: TcpListener, app: Router) -> AppResult<()> {
    if let Ok(addr) = listener.local_addr() {
        info!("Server listening on http://{}", addr);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> AppResult<()> {
    let addr = config.api.address();
    let pool = connect_database(&config).await?;

    let state = AppState::new(postgres_context(pool.clone()), config);
    let app = create_app(state);

    let listener = TcpListener::bind(&addr).await?;
    let result = run_server(listener, app).await;

    info!("Closing database pool");
    pool.close().await;

    result
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}
