//! HTTP API client for the scheduling server.
//!
//! Wraps the transport client with JSON helpers and the error-mapping
//! policy: non-2xx responses carrying a structured `{"error": ...}` body
//! surface that message verbatim as a rejection.

use std::time::Duration;

use reqwest::{Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use url::Url;
use wayfest_domain::{ApiConfig, Result, WayfestError};

use crate::http::HttpClient;

/// Structured error body sent by the server on rejections.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Configuration for the API client.
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Base URL for the scheduling server (e.g. `http://localhost:5000`).
    pub base_url: String,
    /// Timeout applied to every request.
    pub timeout: Duration,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self { base_url: "http://localhost:5000".to_string(), timeout: Duration::from_secs(30) }
    }
}

impl From<&ApiConfig> for ApiClientConfig {
    fn from(config: &ApiConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }
}

/// JSON-over-HTTP client bound to one server.
pub struct ApiClient {
    http: HttpClient,
    config: ApiClientConfig,
}

impl ApiClient {
    /// Create a new API client.
    ///
    /// # Errors
    ///
    /// Returns a `Config` error if the base URL does not parse or the
    /// transport client cannot be constructed.
    pub fn new(config: ApiClientConfig) -> Result<Self> {
        Url::parse(&config.base_url).map_err(|err| {
            WayfestError::Config(format!("invalid base URL {:?}: {err}", config.base_url))
        })?;

        let http = HttpClient::builder().timeout(config.timeout).build()?;

        Ok(Self { http, config })
    }

    /// Issue a request and return the raw response.
    ///
    /// Transport failures become `Network` errors; any HTTP response is
    /// returned as-is. Callers that only care about the happy path go
    /// through the typed helpers instead.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<Response> {
        let url = format!("{}{}", self.config.base_url, path);

        let mut request = self.http.request(method, &url);
        if let Some(body) = body {
            request = request.json(body);
        }

        self.http.send(request).await
    }

    /// GET a JSON resource.
    #[instrument(skip(self), fields(path = %path))]
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.send(Method::GET, path, None).await?;
        Self::decode(Self::check(path, response).await?).await
    }

    /// POST a JSON body and decode the JSON response.
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let body = Self::to_value(body)?;
        let response = self.send(Method::POST, path, Some(&body)).await?;
        Self::decode(Self::check(path, response).await?).await
    }

    /// POST without a body and decode the JSON response.
    #[instrument(skip(self), fields(path = %path))]
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.send(Method::POST, path, None).await?;
        Self::decode(Self::check(path, response).await?).await
    }

    /// PUT a JSON body and decode the JSON response.
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn put<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let body = Self::to_value(body)?;
        let response = self.send(Method::PUT, path, Some(&body)).await?;
        Self::decode(Self::check(path, response).await?).await
    }

    /// DELETE a resource and decode the JSON response.
    #[instrument(skip(self), fields(path = %path))]
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.send(Method::DELETE, path, None).await?;
        Self::decode(Self::check(path, response).await?).await
    }

    fn to_value<B: Serialize>(body: &B) -> Result<serde_json::Value> {
        serde_json::to_value(body)
            .map_err(|err| WayfestError::Internal(format!("failed to serialize body: {err}")))
    }

    /// Turn a non-2xx response into a rejection carrying the server's own
    /// error message when one is present.
    async fn check(path: &str, response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        debug!(path, %status, "request rejected");
        Err(Self::rejection(path, status, &body))
    }

    fn rejection(path: &str, status: StatusCode, body: &str) -> WayfestError {
        match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) => WayfestError::Rejected(parsed.error),
            Err(_) => WayfestError::Rejected(format!("{path} returned status {status}")),
        }
    }

    /// Decode a successful response body.
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        response
            .json()
            .await
            .map_err(|err| WayfestError::Decode(format!("failed to parse response: {err}")))
    }
}
