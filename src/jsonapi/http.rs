//! jsonapi::http
//!
//! HTTP transport using reqwest.
//!
//! # Design
//!
//! This module implements the `Transport` trait over a real HTTP client.
//! Each call sends exactly one GET with `Accept: application/vnd.api+json`
//! and, when credentials are supplied, HTTP Basic authentication.
//!
//! No retries are attempted. Timeouts are whatever the underlying
//! [`Client`] was built with; use [`HttpTransport::with_timeout`] to set one.
//!
//! # Example
//!
//! ```ignore
//! use idc_jsonapi::jsonapi::{HttpTransport, Transport};
//!
//! let transport = HttpTransport::new();
//! let url = reqwest::Url::parse("https://islandora-idc.traefik.me/jsonapi/node/collection_object")?;
//! let body = transport.get(&url, None).await?;
//! ```

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::{Client, Response, StatusCode, Url};
use serde::Deserialize;
use serde_json::Value;

use super::traits::{Credentials, JsonApiError, Transport};

/// Media type of JSON:API documents.
const JSONAPI_MEDIA_TYPE: &str = "application/vnd.api+json";

/// User-Agent header value for API requests.
const USER_AGENT_VALUE: &str = "idc-jsonapi";

/// reqwest-backed transport.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a transport with the default client settings.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Create a transport whose requests time out after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns `JsonApiError::Network` if the client cannot be built
    /// (e.g. the TLS backend fails to initialize).
    pub fn with_timeout(timeout: Duration) -> Result<Self, JsonApiError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| JsonApiError::Network(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }

    /// Wrap an already configured client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    fn headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(JSONAPI_MEDIA_TYPE));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        headers
    }

    /// Handle the response, mapping errors appropriately.
    async fn handle_response(response: Response) -> Result<Value, JsonApiError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| JsonApiError::Decode(format!("response is not JSON: {}", e)))
        } else {
            Err(Self::handle_error_response(response, status).await)
        }
    }

    /// Map a non-success response to an error.
    async fn handle_error_response(response: Response, status: StatusCode) -> JsonApiError {
        let url = response.url().to_string();

        // Drupal reports failures as a JSON:API `errors` array
        let message = response
            .json::<JsonApiErrorDocument>()
            .await
            .ok()
            .and_then(JsonApiErrorDocument::message)
            .unwrap_or_else(|| "Unknown error".to_string());

        tracing::warn!(%url, status = status.as_u16(), %message, "JSON:API request failed");

        match status {
            StatusCode::UNAUTHORIZED => {
                JsonApiError::AuthFailed(format!("Invalid credentials: {}", message))
            }
            StatusCode::FORBIDDEN => JsonApiError::AuthFailed(format!("Permission denied: {}", message)),
            StatusCode::NOT_FOUND => JsonApiError::NotFound(format!("{}: {}", url, message)),
            _ if status.is_server_error() => JsonApiError::Api {
                status: status.as_u16(),
                message: format!("Drupal server error: {}", message),
            },
            _ => JsonApiError::Api {
                status: status.as_u16(),
                message,
            },
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn get(
        &self,
        url: &Url,
        credentials: Option<&Credentials>,
    ) -> Result<Value, JsonApiError> {
        tracing::debug!(%url, authenticated = credentials.is_some(), "GET");

        let mut request = self.client.get(url.clone()).headers(Self::headers());
        if let Some(creds) = credentials {
            request = request.basic_auth(creds.username(), Some(creds.password()));
        }

        let response = request
            .send()
            .await
            .map_err(|e| JsonApiError::Network(e.to_string()))?;

        Self::handle_response(response).await
    }
}

// =============================================================================
// JSON:API error document
// =============================================================================

#[derive(Debug, Deserialize)]
struct JsonApiErrorDocument {
    #[serde(default)]
    errors: Vec<JsonApiErrorObject>,
}

#[derive(Debug, Deserialize)]
struct JsonApiErrorObject {
    title: Option<String>,
    detail: Option<String>,
}

impl JsonApiErrorDocument {
    /// The first error's `detail`, or its `title` when `detail` is blank.
    fn message(self) -> Option<String> {
        let first = self.errors.into_iter().next()?;
        let non_blank = |text: Option<String>| text.filter(|t| !t.trim().is_empty());
        non_blank(first.detail).or_else(|| non_blank(first.title))
    }
}
