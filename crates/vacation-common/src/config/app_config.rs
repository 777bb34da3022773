//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file if present).

use serde::Deserialize;
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub data_source: DataSourceConfig,
    pub latency: LatencyConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default)]
    pub env: Environment,
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

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" => Ok(Self::Development),
            "staging" => Ok(Self::Staging),
            "production" => Ok(Self::Production),
            other => Err(ConfigError::InvalidValue("APP_ENV", other.to_string())),
        }
    }
}

/// HTTP server configuration
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

/// Which repository implementations back the use cases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DataSourceKind {
    /// Seeded in-process store
    #[default]
    Memory,
    /// Remote REST backend
    Http,
}

impl FromStr for DataSourceKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "http" => Ok(Self::Http),
            other => Err(ConfigError::InvalidValue("DATA_SOURCE", other.to_string())),
        }
    }
}

/// Data source selection and HTTP client settings
#[derive(Debug, Clone, Deserialize)]
pub struct DataSourceConfig {
    #[serde(default)]
    pub kind: DataSourceKind,
    /// Base URL of the REST backend, required for [`DataSourceKind::Http`]
    pub api_base_url: Option<String>,
    #[serde(default = "default_http_timeout_secs")]
    pub http_timeout_secs: u64,
}

impl DataSourceConfig {
    #[must_use]
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}

/// Simulated latency of the in-memory repositories, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct LatencyConfig {
    #[serde(default = "default_read_latency")]
    pub read_ms: u64,
    #[serde(default = "default_write_latency")]
    pub write_ms: u64,
    #[serde(default = "default_auth_latency")]
    pub auth_ms: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            read_ms: default_read_latency(),
            write_ms: default_write_latency(),
            auth_ms: default_auth_latency(),
        }
    }
}

// Default value functions
fn default_app_name() -> String {
    "vacation-server".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_http_timeout_secs() -> u64 {
    10
}

fn default_read_latency() -> u64 {
    250
}

fn default_write_latency() -> u64 {
    500
}

fn default_auth_latency() -> u64 {
    800
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if a variable is malformed or a required one is missing
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source
    ///
    /// # Errors
    /// Returns an error if a variable is malformed or a required one is missing
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = lookup("APP_ENV")
            .map(|s| s.parse::<Environment>())
            .transpose()?
            .unwrap_or_default();

        let kind = lookup("DATA_SOURCE")
            .map(|s| s.parse::<DataSourceKind>())
            .transpose()?
            .unwrap_or_default();

        let api_base_url = lookup("API_BASE_URL")
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty());

        if kind == DataSourceKind::Http && api_base_url.is_none() {
            return Err(ConfigError::MissingVar("API_BASE_URL"));
        }

        Ok(Self {
            app: AppSettings {
                name: lookup("APP_NAME").unwrap_or_else(default_app_name),
                env,
            },
            api: ServerConfig {
                host: lookup("API_HOST").unwrap_or_else(default_host),
                port: parse_or(&lookup, "API_PORT", default_port())?,
            },
            data_source: DataSourceConfig {
                kind,
                api_base_url,
                http_timeout_secs: parse_or(
                    &lookup,
                    "HTTP_TIMEOUT_SECS",
                    default_http_timeout_secs(),
                )?,
            },
            latency: LatencyConfig {
                read_ms: parse_or(&lookup, "MEMORY_LATENCY_READ_MS", default_read_latency())?,
                write_ms: parse_or(&lookup, "MEMORY_LATENCY_WRITE_MS", default_write_latency())?,
                auth_ms: parse_or(&lookup, "MEMORY_LATENCY_AUTH_MS", default_auth_latency())?,
            },
        })
    }
}

/// Parse an optional numeric variable, rejecting malformed values
fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key, raw)),
        None => Ok(default),
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
