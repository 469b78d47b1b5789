//! Environment-backed configuration.
//!
//! All settings are read once at process start into an immutable [`AppConfig`].
//! Values come from `SHORTLY_*` environment variables, with a `.env` file
//! honored via `dotenvy` before the first read (process environment wins).

use crate::error::ConfigError;
use std::env;
use std::time::Duration;

const DEFAULT_API_URL: &str = "http://localhost:8080";
const DEFAULT_TIMEOUT_MS: u64 = 10_000;
const DEFAULT_RETRY_ATTEMPTS: u32 = 3;
const DEFAULT_APP_NAME: &str = "shortly";

/// Deployment environment, from `SHORTLY_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
    Testing,
}

impl Environment {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            "test" | "testing" => Ok(Environment::Testing),
            other => Err(ConfigError::InvalidValue {
                var: "SHORTLY_ENV".to_string(),
                value: other.to_string(),
                reason: "expected one of: development, production, test".to_string(),
            }),
        }
    }
}

/// Process-wide settings, read-only after construction.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_url: String,
    pub api_key: Option<String>,
    pub api_timeout: Duration,
    /// Maximum attempts for retryable API failures (timeouts, 5xx).
    pub api_retry_attempts: u32,
    pub use_mock_api: bool,
    pub app_name: String,
    pub app_version: String,
    pub enable_analytics: bool,
    pub enable_debug: bool,
    pub show_dev_tools: bool,
    pub environment: Environment,
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(|var| env::var(var).ok())
    }

    /// Load configuration from an arbitrary variable source.
    ///
    /// The indirection keeps parsing testable without mutating process-wide
    /// environment state.
    pub fn from_source<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = match lookup("SHORTLY_ENV") {
            Some(value) => Environment::parse(value.trim())?,
            None => Environment::Development,
        };

        let api_url = match lookup("SHORTLY_API_URL") {
            Some(url) if !url.trim().is_empty() => url.trim().trim_end_matches('/').to_string(),
            _ if environment == Environment::Production => {
                return Err(ConfigError::MissingVar {
                    var: "SHORTLY_API_URL".to_string(),
                    hint: "Set SHORTLY_API_URL to the shortener API base URL".to_string(),
                });
            }
            _ => DEFAULT_API_URL.to_string(),
        };

        let api_key = lookup("SHORTLY_API_KEY").filter(|key| !key.is_empty());

        let timeout_ms = parse_var(&lookup, "SHORTLY_API_TIMEOUT_MS", DEFAULT_TIMEOUT_MS)?;
        let api_retry_attempts = parse_var(
            &lookup,
            "SHORTLY_API_RETRY_ATTEMPTS",
            DEFAULT_RETRY_ATTEMPTS,
        )?;

        Ok(AppConfig {
            api_url,
            api_key,
            api_timeout: Duration::from_millis(timeout_ms),
            api_retry_attempts,
            use_mock_api: flag(&lookup, "SHORTLY_USE_MOCK_API"),
            app_name: lookup("SHORTLY_APP_NAME").unwrap_or_else(|| DEFAULT_APP_NAME.to_string()),
            app_version: lookup("SHORTLY_APP_VERSION")
                .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string()),
            enable_analytics: flag(&lookup, "SHORTLY_ENABLE_ANALYTICS"),
            enable_debug: flag(&lookup, "SHORTLY_ENABLE_DEBUG"),
            show_dev_tools: flag(&lookup, "SHORTLY_SHOW_DEV_TOOLS"),
            environment,
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }
}

/// A flag is set iff the variable is exactly `true`.
fn flag<F>(lookup: &F, var: &str) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    lookup(var).as_deref() == Some("true")
}

fn parse_var<F, T>(lookup: &F, var: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        Some(raw) => raw.trim().parse().map_err(|err| ConfigError::InvalidValue {
            var: var.to_string(),
            value: raw,
            reason: format!("{}", err),
        }),
        None => Ok(default),
    }
}
