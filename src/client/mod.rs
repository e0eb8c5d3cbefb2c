//! HTTP client for the TuningSearch REST API.
//!
//! One client instance is shared by every tool call. Requests are plain
//! authenticated GETs; responses arrive in a `{status, data}` envelope and
//! only `data` is surfaced. A non-2xx status is an error, reported with the
//! HTTP status code and text. There is no retry and no backoff.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::config::Config;
use crate::models::{QuotaInfo, SearchData, SearchRequest};

/// Default API base URL.
pub const DEFAULT_API_BASE: &str = "https://api.tuningsearch.com/v1";

/// Errors that can occur when calling the TuningSearch API.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The API answered with a non-2xx status
    #[error("TuningSearch API request failed: {status} {status_text}")]
    RequestFailed {
        /// HTTP status code
        status: u16,
        /// Canonical status text
        status_text: String,
    },

    /// Network, DNS or connection error
    #[error("Network error: {0}")]
    Network(String),

    /// Malformed response body
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Response envelope wrapping every TuningSearch payload.
#[derive(Debug, Deserialize)]
struct ApiEnvelope<T> {
    data: T,
}

/// Client for the TuningSearch API
#[derive(Debug, Clone)]
pub struct TuningSearchClient {
    client: Client,
    base_url: String,
}

impl TuningSearchClient {
    /// Create a client against the default API base
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_API_BASE)
    }

    /// Create a client against a custom API base (used by tests to point at
    /// a local stub server)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::with_settings(base_url, Duration::from_secs(30))
    }

    /// Create a client with a custom base URL and request timeout
    pub fn with_settings(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Create a client from the application configuration
    pub fn from_config(config: &Config) -> Self {
        Self::with_settings(&config.api_base, Duration::from_secs(config.timeout_secs))
    }

    /// The API base this client targets
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Run a web search.
    ///
    /// Builds `q=<query>` plus exactly the optional parameters present on the
    /// request (see [`SearchRequest::query_pairs`]) and returns the `data`
    /// member of the response envelope.
    pub async fn search(
        &self,
        request: &SearchRequest,
        api_key: &str,
    ) -> Result<SearchData, ClientError> {
        let url = format!("{}/search", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&request.query_pairs())
            .bearer_auth(api_key)
            .send()
            .await
            .map_err(|e| ClientError::Network(format!("Failed to reach TuningSearch: {}", e)))?;

        if !response.status().is_success() {
            return Err(Self::request_failed(response.status()));
        }

        let envelope: ApiEnvelope<SearchData> = response
            .json()
            .await
            .map_err(|e| ClientError::Parse(format!("Failed to parse search response: {}", e)))?;

        Ok(envelope.data)
    }

    /// Fetch the account quota snapshot.
    pub async fn quota(&self, api_key: &str) -> Result<QuotaInfo, ClientError> {
        let url = format!("{}/me/quota", self.base_url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(api_key)
            .send()
            .await
            .map_err(|e| ClientError::Network(format!("Failed to reach TuningSearch: {}", e)))?;

        if !response.status().is_success() {
            return Err(Self::request_failed(response.status()));
        }

        let envelope: ApiEnvelope<QuotaInfo> = response
            .json()
            .await
            .map_err(|e| ClientError::Parse(format!("Failed to parse quota response: {}", e)))?;

        Ok(envelope.data)
    }

    fn request_failed(status: reqwest::StatusCode) -> ClientError {
        ClientError::RequestFailed {
            status: status.as_u16(),
            status_text: status
                .canonical_reason()
                .unwrap_or("Unknown Status")
                .to_string(),
        }
    }
}

impl Default for TuningSearchClient {
    fn default() -> Self {
        Self::new()
    }
}
