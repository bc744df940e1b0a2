//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file if present).

use serde::Deserialize;
use std::str::FromStr;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub database: DatabaseConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default)]
    pub env: Environment,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl AppSettings {
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Ok(Self::Production),
            "staging" => Ok(Self::Staging),
            "development" | "dev" => Ok(Self::Development),
            other => Err(ConfigError::InvalidValue("APP_ENV", other.to_string())),
        }
    }
}

/// HTTP listener configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// Attempts made to connect and bootstrap the schema at startup
    #[serde(default = "default_connect_retries")]
    pub connect_retries: u32,
}

/// Rate limiting configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,
    #[serde(default = "default_burst")]
    pub burst: u32,
}

/// CORS configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

// Default value functions
fn default_app_name() -> String {
    "review-service".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_connect_retries() -> u32 {
    5
}

fn default_true() -> bool {
    true
}

fn default_requests_per_second() -> u32 {
    50
}

fn default_burst() -> u32 {
    100
}

/// Parse an optional variable, falling back to `default` when unset.
fn parse_or<T, F>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key, raw)),
        _ => Ok(default),
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if `DATABASE_URL` is missing or a variable cannot be parsed
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    ///
    /// # Errors
    /// Returns an error if `DATABASE_URL` is missing or a variable cannot be parsed
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = match lookup("APP_ENV") {
            Some(raw) => raw.parse()?,
            None => Environment::default(),
        };

        Ok(Self {
            app: AppSettings {
                name: lookup("APP_NAME").unwrap_or_else(default_app_name),
                env,
                request_timeout_secs: parse_or(
                    &lookup,
                    "REQUEST_TIMEOUT_SECS",
                    default_request_timeout_secs(),
                )?,
            },
            api: ServerConfig {
                host: lookup("API_HOST").unwrap_or_else(default_host),
                port: parse_or(&lookup, "API_PORT", default_port())?,
            },
            database: DatabaseConfig {
                url: lookup("DATABASE_URL")
                    .filter(|s| !s.trim().is_empty())
                    .ok_or(ConfigError::MissingVar("DATABASE_URL"))?,
                max_connections: parse_or(
                    &lookup,
                    "DATABASE_MAX_CONNECTIONS",
                    default_max_connections(),
                )?,
                min_connections: parse_or(
                    &lookup,
                    "DATABASE_MIN_CONNECTIONS",
                    default_min_connections(),
                )?,
                connect_retries: parse_or(
                    &lookup,
                    "DATABASE_CONNECT_RETRIES",
                    default_connect_retries(),
                )?,
            },
            rate_limit: RateLimitConfig {
                enabled: parse_or(&lookup, "RATE_LIMIT_ENABLED", default_true())?,
                requests_per_second: parse_or(
                    &lookup,
                    "RATE_LIMIT_REQUESTS_PER_SECOND",
                    default_requests_per_second(),
                )?,
                burst: parse_or(&lookup, "RATE_LIMIT_BURST", default_burst())?,
            },
            cors: CorsConfig {
                allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                    .map(|s| {
                        s.split(',')
                            .map(str::trim)
                            .filter(|o| !o.is_empty())
                            .map(String::from)
                            .collect()
                    })
                    .unwrap_or_default(),
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
