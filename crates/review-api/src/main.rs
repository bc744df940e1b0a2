//! Review API Server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p review-api
//! ```
//!
//! Configuration is loaded from environment variables (and `.env` if present).

use review_common::{try_init_tracing, AppConfig, AppResult, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("{e}");
        error!(error = %e, "Server failed");
        std::process::exit(1);
    }
}

async fn run() -> AppResult<()> {
    let config = AppConfig::from_env()?;

    if let Err(e) = try_init_tracing(TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        name = %config.app.name,
        env = ?config.app.env,
        port = config.api.port,
        "Starting Review API Server..."
    );

    review_api::run(config).await
}
