//! jsonapi::mock
//!
//! Mock transport for deterministic testing.
//!
//! # Design
//!
//! The mock transport answers filtered collection queries from resources held
//! in memory, the way Drupal does: every response is a document whose `data`
//! array holds the resources of the requested bundle matching the filter.
//! Every request is recorded, with its credentials, so tests can assert on
//! how many requests were issued and what they looked like.
//!
//! # Example
//!
//! ```
//! use idc_jsonapi::jsonapi::mock::MockTransport;
//! use idc_jsonapi::jsonapi::{JsonApiUrl, Transport};
//! use serde_json::json;
//!
//! # tokio_test::block_on(async {
//! let transport = MockTransport::new();
//! transport.insert(json!({
//!     "type": "taxonomy_term--language",
//!     "id": "7397e0c4",
//!     "attributes": {"name": "English", "field_language_code": "en"}
//! })).unwrap();
//!
//! let url = JsonApiUrl::new("http://localhost", "taxonomy_term", "language")
//!     .filter("id", "7397e0c4")
//!     .to_url()
//!     .unwrap();
//! let doc = transport.get(&url, None).await.unwrap();
//!
//! assert_eq!(doc["data"][0]["attributes"]["field_language_code"], "en");
//! assert_eq!(transport.request_count(), 1);
//! # });
//! ```

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use reqwest::Url;
use serde_json::{json, Value};

use super::traits::{Credentials, JsonApiError, Transport};
use crate::core::types::DrupalType;

/// Mock transport for testing.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping; clones share state.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    inner: Arc<Mutex<MockTransportInner>>,
}

#[derive(Debug, Default)]
struct MockTransportInner {
    /// Stored resources, in insertion order.
    resources: Vec<StoredResource>,
    /// Error returned by every request while set.
    fail_with: Option<JsonApiError>,
    /// Recorded requests for verification.
    requests: Vec<MockRequest>,
}

#[derive(Debug)]
struct StoredResource {
    resource_type: DrupalType,
    id: String,
    body: Value,
}

/// Recorded request for test verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockRequest {
    /// Full request URL
    pub url: Url,
    /// Credentials the request carried
    pub credentials: Option<Credentials>,
}

impl MockRequest {
    /// Value of the `filter[<field>]` query parameter.
    pub fn filter(&self, field: &str) -> Option<String> {
        let key = format!("filter[{}]", field);
        self.url
            .query_pairs()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.into_owned())
    }

    /// The `(entity, bundle)` the request targeted.
    pub fn collection(&self) -> Option<(String, String)> {
        collection_of(&self.url)
    }
}

impl MockTransport {
    /// Create an empty mock transport.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, MockTransportInner> {
        // A panic in another test thread must not hide this test's result
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Store a resource object (`{type, id, attributes, relationships}`).
    ///
    /// Inserting the same type and id twice is allowed and makes filtered
    /// queries for that id return both.
    ///
    /// # Errors
    ///
    /// Returns `JsonApiError::Decode` if the object lacks a valid `type` or
    /// `id`.
    pub fn insert(&self, resource: Value) -> Result<(), JsonApiError> {
        let resource_type: DrupalType = resource
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| JsonApiError::Decode("mock resource has no type".into()))?
            .parse()
            .map_err(|e| JsonApiError::Decode(format!("mock resource type: {}", e)))?;
        let id = resource
            .get("id")
            .and_then(Value::as_str)
            .ok_or_else(|| JsonApiError::Decode("mock resource has no id".into()))?
            .to_string();

        self.lock().resources.push(StoredResource {
            resource_type,
            id,
            body: resource,
        });
        Ok(())
    }

    /// Make every subsequent request fail with `error`.
    pub fn fail_with(&self, error: JsonApiError) {
        self.lock().fail_with = Some(error);
    }

    /// Clear a failure set by [`fail_with`](Self::fail_with).
    pub fn clear_failure(&self) {
        self.lock().fail_with = None;
    }

    /// All recorded requests, oldest first.
    pub fn requests(&self) -> Vec<MockRequest> {
        self.lock().requests.clone()
    }

    /// Number of requests issued so far.
    pub fn request_count(&self) -> usize {
        self.lock().requests.len()
    }

    /// The most recent request.
    pub fn last_request(&self) -> Option<MockRequest> {
        self.lock().requests.last().cloned()
    }
}

/// Extract `(entity, bundle)` from a `.../jsonapi/<entity>/<bundle>` URL.
fn collection_of(url: &Url) -> Option<(String, String)> {
    let segments: Vec<&str> = url.path_segments()?.collect();
    let pos = segments.iter().rposition(|s| *s == "jsonapi")?;
    match &segments[pos + 1..] {
        [entity, bundle] => Some((entity.to_string(), bundle.to_string())),
        _ => None,
    }
}

#[async_trait]
impl Transport for MockTransport {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn get(
        &self,
        url: &Url,
        credentials: Option<&Credentials>,
    ) -> Result<Value, JsonApiError> {
        let mut inner = self.lock();
        let request = MockRequest {
            url: url.clone(),
            credentials: credentials.cloned(),
        };
        inner.requests.push(request.clone());

        if let Some(err) = &inner.fail_with {
            return Err(err.clone());
        }

        let (entity, bundle) = collection_of(url)
            .ok_or_else(|| JsonApiError::NotFound(format!("{}: no such route", url)))?;
        let id_filter = request.filter("id");

        let data: Vec<Value> = inner
            .resources
            .iter()
            .filter(|r| r.resource_type.entity() == entity && r.resource_type.bundle() == bundle)
            .filter(|r| id_filter.as_deref().map_or(true, |id| r.id == id))
            .map(|r| r.body.clone())
            .collect();

        Ok(json!({
            "jsonapi": {"version": "1.0"},
            "data": data,
            "links": {"self": {"href": url.as_str()}}
        }))
    }
}
