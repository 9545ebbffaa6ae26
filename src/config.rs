//! Configuration for the Pushover client
//!
//! Endpoint, timeout and environment variable names. Values come from
//! defaults, the process environment or a `.env` file.

use std::env;
use std::time::Duration;

use crate::{Error, Result};

/// Pushover messages endpoint
pub const API_URL: &str = "https://api.pushover.net/1/messages.json";

pub const USER_ENV: &str = "PUSHOVER_USER";
pub const TOKEN_ENV: &str = "PUSHOVER_TOKEN";
pub const API_URL_ENV: &str = "PUSHOVER_API_URL";
pub const TIMEOUT_ENV: &str = "PUSHOVER_TIMEOUT";

/// Request timeout in seconds when none is configured
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// HTTP client settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        let api_url = env::var(API_URL_ENV)
            .ok()
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| API_URL.to_string());

        let timeout = match env::var(TIMEOUT_ENV) {
            Ok(raw) if !raw.is_empty() => parse_timeout(&raw)?,
            _ => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self { api_url, timeout })
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Result<Self> {
        if secs == 0 {
            return Err(Error::InvalidArgument(
                "timeout must be at least 1 second".to_string(),
            ));
        }
        self.timeout = Duration::from_secs(secs);
        Ok(self)
    }
}

fn parse_timeout(raw: &str) -> Result<Duration> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(Error::InvalidArgument(format!(
            "{} must be a positive number of seconds, got '{}'",
            TIMEOUT_ENV, raw
        ))),
    }
}

/// Load .env file into environment variables using dotenvy
pub fn load_dotenv() {
    // Try to load from current directory first, then parent
    if dotenvy::dotenv().is_err() {
        let _ = dotenvy::from_filename("../.env");
    }
}
