//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers and asserting on responses.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use review_api::{connect_database, create_app, postgres_context, AppState};
use review_common::AppConfig;
use review_db::InMemoryStore;
use review_service::ServiceContext;
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a server backed by a fresh in-memory store
    pub async fn start() -> Result<Self> {
        Ok(Self::start_in_memory().await?.0)
    }

    /// Start an in-memory server and keep a handle on its store for direct reads
    pub async fn start_in_memory() -> Result<(Self, ServiceContext)> {
        let context = ServiceContext::from_store(Arc::new(InMemoryStore::new()));
        let server = Self::start_with_context(context.clone(), test_config()?).await?;
        Ok((server, context))
    }

    /// Start a server backed by PostgreSQL, or `None` when `DATABASE_URL` is unset
    pub async fn start_postgres() -> Result<Option<Self>> {
        dotenvy::dotenv().ok();
        if std::env::var("DATABASE_URL").is_err() {
            eprintln!("Skipping test: DATABASE_URL not set");
            return Ok(None);
        }

        let config = AppConfig::from_env().map_err(|e| anyhow::anyhow!("Config error: {e}"))?;
        let pool = connect_database(&config).await?;
        let server = Self::start_with_context(postgres_context(pool), without_rate_limit(config)).await?;
        Ok(Some(server))
    }

    /// Start a server with an explicit service context
    pub async fn start_with_context(context: ServiceContext, config: AppConfig) -> Result<Self> {
        let app = create_app(AppState::new(context, config));

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).json(body).send().await?)
    }

    /// Make a POST request with a raw JSON body
    pub async fn post_raw(&self, path: &str, body: &'static str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?)
    }
}

/// Configuration for in-memory servers; the database URL is never dialed
pub fn test_config() -> Result<AppConfig> {
    let config = AppConfig::from_lookup(|key| match key {
        "DATABASE_URL" => Some("postgres://unused@localhost/unused".to_string()),
        "RATE_LIMIT_ENABLED" => Some("false".to_string()),
        _ => None,
    })
    .map_err(|e| anyhow::anyhow!("Config error: {e}"))?;

    Ok(config)
}

fn without_rate_limit(mut config: AppConfig) -> AppConfig {
    config.rate_limit.enabled = false;
    config
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(response.json().await?)
}

/// Assert an error response and return its `error.code`
pub async fn assert_error(response: Response, expected_status: StatusCode) -> Result<String> {
    let body: crate::fixtures::ErrorBody = assert_json(response, expected_status).await?;
    Ok(body.error.code)
}
