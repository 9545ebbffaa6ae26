//! Pushover messages API client.

use std::error::Error as StdError;

use reqwest::header::HeaderMap;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::config::ClientConfig;
use crate::request::{FieldPolicy, NotificationRequest};
use crate::{Error, Result};

const LIMIT_HEADER: &str = "x-limit-app-limit";
const REMAINING_HEADER: &str = "x-limit-app-remaining";
const RESET_HEADER: &str = "x-limit-app-reset";

/// Application message quota, as reported by the response headers.
///
/// Values are kept as sent so they can be displayed unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Quota {
    pub limit: Option<String>,
    pub remaining: Option<String>,
    /// Unix timestamp of the next quota reset
    pub reset: Option<String>,
}

impl Quota {
    fn from_headers(headers: &HeaderMap) -> Self {
        let value = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(|v| v.to_string())
        };

        Self {
            limit: value(LIMIT_HEADER),
            remaining: value(REMAINING_HEADER),
            reset: value(RESET_HEADER),
        }
    }
}

/// A message accepted by Pushover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    /// Request id echoed back by the API
    pub request_id: Option<String>,
    pub quota: Quota,
}

/// Pushover client.
#[derive(Debug, Clone)]
pub struct PushoverClient {
    http: Client,
    api_url: String,
    policy: FieldPolicy,
}

impl PushoverClient {
    /// Create client with the given endpoint and timeout.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("pushover_notify/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::InvalidArgument(format!("HTTP client error: {}", e)))?;

        Ok(Self {
            http,
            api_url: config.api_url,
            policy: FieldPolicy::default(),
        })
    }

    /// Create client for a custom endpoint with default settings.
    pub fn with_url(api_url: &str) -> Result<Self> {
        Self::new(ClientConfig {
            api_url: api_url.to_string(),
            ..ClientConfig::default()
        })
    }

    pub fn with_policy(mut self, policy: FieldPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Send one message.
    pub async fn send(&self, request: &NotificationRequest) -> Result<Delivery> {
        let form = request.form_fields(self.policy);
        debug!(
            url = %self.api_url,
            fields = ?form.iter().map(|(name, _)| *name).collect::<Vec<_>>(),
            "Posting message"
        );

        let response = self
            .http
            .post(&self.api_url)
            .form(&form)
            .send()
            .await
            .map_err(|e| Error::TransportError(describe_transport_error(&e)))?;

        let status = response.status();
        let quota = Quota::from_headers(response.headers());
        let body = response.text().await?;

        interpret(status.as_u16(), &body, quota)
    }
}

/// Body of a messages API response. Only `status` decides the outcome;
/// the other fields are read leniently for display.
#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    status: Value,
    #[serde(default)]
    request: Value,
    #[serde(default)]
    errors: Value,
}

impl MessagesResponse {
    fn request_id(&self) -> Option<String> {
        self.request.as_str().map(|s| s.to_string())
    }

    fn error_messages(&self) -> Vec<String> {
        self.errors
            .as_array()
            .map(|errors| {
                errors
                    .iter()
                    .filter_map(Value::as_str)
                    .map(|s| s.to_string())
                    .collect()
            })
            .unwrap_or_default()
    }
}

fn interpret(http_status: u16, body: &str, quota: Quota) -> Result<Delivery> {
    let parsed: MessagesResponse = serde_json::from_str(body)
        .map_err(|e| Error::MalformedResponse(format!("{} (HTTP {}): {}", e, http_status, body)))?;

    let Some(status) = parsed.status.as_f64() else {
        return Err(Error::MalformedResponse(format!(
            "missing or non-numeric status (HTTP {}): {}",
            http_status, body
        )));
    };

    if http_status == 200 && status == 1.0 {
        let request_id = parsed.request_id();
        info!(request = ?request_id, "Message accepted");
        return Ok(Delivery { request_id, quota });
    }

    let errors = parsed.error_messages();
    info!(http_status, status, errors = ?errors, "Message rejected");
    Err(Error::ApiError {
        status: http_status,
        body: body.to_string(),
        errors,
    })
}

fn describe_transport_error(err: &reqwest::Error) -> String {
    let kind = if err.is_timeout() {
        "timed out"
    } else if err.is_connect() {
        "connection failed"
    } else {
        "request failed"
    };

    let mut message = format!("{}: {}", kind, err);
    let mut source = StdError::source(err);
    while let Some(cause) = source {
        message.push_str(&format!(": {}", cause));
        source = StdError::source(cause);
    }
    message
}
