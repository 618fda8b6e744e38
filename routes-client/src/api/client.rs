//! Reqwest-backed client for the routing service.

use super::RoutesApi;
use super::error::ApiError;
use super::types::{ErrorBody, FindRoutesRequest, FindRoutesResponse, Place, Route};

/// Default base URL for the routing service.
const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Environment variable overriding the base URL.
const BASE_URL_ENV: &str = "ROUTES_API_URL";

/// Configuration for the routing service client.
///
/// The base URL is an explicit value passed in at construction, not a
/// process-wide constant; [`RoutesClientConfig::from_env`] is the
/// documented override path.
#[derive(Debug, Clone)]
pub struct RoutesClientConfig {
    /// Base URL for the service.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl RoutesClientConfig {
    /// Create a config pointing at the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: 30,
        }
    }

    /// Read the base URL from `ROUTES_API_URL`, falling back to the
    /// default local address.
    pub fn from_env() -> Self {
        match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for RoutesClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Client for the routing service HTTP API.
#[derive(Debug, Clone)]
pub struct RoutesClient {
    http: reqwest::Client,
    base_url: String,
}

impl RoutesClient {
    /// Create a new client with the given configuration.
    pub fn new(config: RoutesClientConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Probe the service's liveness endpoint.
    pub async fn health(&self) -> Result<(), ApiError> {
        let url = format!("{}/health", self.base_url);

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(status.as_u16(), body));
        }

        Ok(())
    }
}

impl RoutesApi for RoutesClient {
    async fn search_places(&self, query: &str) -> Result<Vec<Place>, ApiError> {
        let url = format!("{}/places/search", self.base_url);

        let response = self.http.get(&url).query(&[("q", query)]).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(status.as_u16(), body));
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| ApiError::Json {
            message: e.to_string(),
        })
    }

    async fn find_routes(&self, request: &FindRoutesRequest) -> Result<Vec<Route>, ApiError> {
        let url = format!("{}/routes/find", self.base_url);

        let response = self.http.post(&url).json(request).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(status.as_u16(), body));
        }

        let body = response.text().await?;

        let response: FindRoutesResponse =
            serde_json::from_str(&body).map_err(|e| ApiError::Json {
                message: e.to_string(),
            })?;

        Ok(response.routes)
    }
}

/// Build an [`ApiError::Api`], pulling the server's `detail` field out of
/// the body when the body is a JSON object carrying one.
fn status_error(status: u16, body: String) -> ApiError {
    let detail = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(|b| b.detail);

    ApiError::Api {
        status,
        message: body,
        detail,
    }
}
