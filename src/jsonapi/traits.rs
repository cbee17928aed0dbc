//! jsonapi::traits
//!
//! Transport trait and shared request/response types.
//!
//! # Design
//!
//! The `Transport` trait is async because every call performs network I/O.
//! It has a single operation: GET a JSON:API URL, optionally with HTTP Basic
//! credentials, and hand back the decoded JSON body. Everything above it
//! (query construction, result-count checks, typed decoding) lives in
//! [`super::Resolver`], so test doubles only need to answer GETs.
//!
//! # Example
//!
//! ```ignore
//! use idc_jsonapi::jsonapi::{Credentials, JsonApiError, Transport};
//!
//! async fn fetch(transport: &dyn Transport, url: &reqwest::Url) -> Result<(), JsonApiError> {
//!     let creds = Credentials::new("admin", "password");
//!     let body = transport.get(url, Some(&creds)).await?;
//!     println!("{}", body["data"]);
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use reqwest::Url;
use serde_json::Value;
use thiserror::Error;

/// Errors from JSON:API requests and reference resolution.
///
/// Transport-level failures (`Network`, `AuthFailed`, `NotFound`, `Api`)
/// are kept distinct from response-shape failures (`Decode`,
/// `NotExactlyOne`) so callers can tell "the server could not be asked"
/// from "the server answered with something unexpected".
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JsonApiError {
    /// The request URL could not be constructed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Network or connection error.
    #[error("network error: {0}")]
    Network(String),

    /// Authentication failed (bad credentials or insufficient permissions).
    #[error("authentication failed: {0}")]
    AuthFailed(String),

    /// The endpoint does not exist (unknown entity type or bundle).
    #[error("not found: {0}")]
    NotFound(String),

    /// The server returned a non-success status.
    #[error("API error: {status} - {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error detail from the JSON:API `errors` array, if any
        message: String,
    },

    /// The response body was not the expected JSON shape.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// The filtered query did not match exactly one resource.
    #[error("expected exactly one resource from {url}, found {count}")]
    NotExactlyOne {
        /// The request URL
        url: String,
        /// Number of resources in the result set
        count: usize,
    },
}

impl JsonApiError {
    /// Whether the failure happened before a usable response was received.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            JsonApiError::Network(_)
                | JsonApiError::AuthFailed(_)
                | JsonApiError::NotFound(_)
                | JsonApiError::Api { .. }
        )
    }
}

/// Static HTTP Basic credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Create credentials from a username and password.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// Custom Debug to avoid exposing the password
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// A client able to GET JSON:API documents.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so one transport can back many
/// concurrent resolves.
///
/// # Error Handling
///
/// Implementations map connection problems to `Network`, 401/403 to
/// `AuthFailed`, 404 to `NotFound`, any other non-success status to `Api`,
/// and an unparseable body to `Decode`.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Get the transport name (e.g., "http", "mock").
    fn name(&self) -> &'static str;

    /// Issue exactly one GET request and return the JSON body.
    async fn get(&self, url: &Url, credentials: Option<&Credentials>)
        -> Result<Value, JsonApiError>;
}
