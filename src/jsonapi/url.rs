//! jsonapi::url
//!
//! Construction of filtered JSON:API collection queries.
//!
//! Drupal exposes every bundle as a collection at
//! `<base>/jsonapi/<entity>/<bundle>`. A single resource is located by
//! filtering that collection, e.g. `?filter[id]=<uuid>`.

use reqwest::Url;

use super::traits::JsonApiError;
use crate::core::types::{DrupalType, ResourceRef};

/// Path prefix under which Drupal mounts the JSON:API module.
const JSONAPI_PREFIX: &str = "jsonapi";

/// Filter field used to look a resource up by its identifier.
pub const ID_FILTER: &str = "id";

/// A filtered JSON:API collection query.
///
/// # Example
///
/// ```
/// use idc_jsonapi::jsonapi::JsonApiUrl;
///
/// let url = JsonApiUrl::new("https://islandora-idc.traefik.me", "media", "image")
///     .filter("id", "090690a5-4db5-4d72-a94e-3b26a90b516b")
///     .to_url()
///     .unwrap();
///
/// assert_eq!(url.path(), "/jsonapi/media/image");
/// let (key, value) = url.query_pairs().next().unwrap();
/// assert_eq!(key, "filter[id]");
/// assert_eq!(value, "090690a5-4db5-4d72-a94e-3b26a90b516b");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonApiUrl {
    base_url: String,
    entity: String,
    bundle: String,
    filter: Option<(String, String)>,
}

impl JsonApiUrl {
    /// Query the whole collection of `entity`/`bundle` under `base_url`.
    pub fn new(
        base_url: impl Into<String>,
        entity: impl Into<String>,
        bundle: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            entity: entity.into(),
            bundle: bundle.into(),
            filter: None,
        }
    }

    /// Query that locates the resource a reference points at.
    pub fn for_reference(base_url: &Url, reference: &ResourceRef) -> Self {
        let ty: &DrupalType = reference.resource_type();
        Self::new(base_url.as_str(), ty.entity(), ty.bundle()).filter(ID_FILTER, reference.id())
    }

    /// Restrict the query to resources whose `field` equals `value`.
    pub fn filter(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.filter = Some((field.into(), value.into()));
        self
    }

    pub fn entity(&self) -> &str {
        &self.entity
    }

    pub fn bundle(&self) -> &str {
        &self.bundle
    }

    /// Build the request URL.
    ///
    /// Any path on the base URL is kept, so a site mounted under a
    /// sub-directory still resolves correctly.
    ///
    /// # Errors
    ///
    /// Returns `JsonApiError::InvalidUrl` if the base URL does not parse or
    /// cannot carry a path (e.g. `mailto:`).
    pub fn to_url(&self) -> Result<Url, JsonApiError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| JsonApiError::InvalidUrl(format!("'{}': {}", self.base_url, e)))?;

        url.set_query(None);
        url.set_fragment(None);
        url.path_segments_mut()
            .map_err(|_| {
                JsonApiError::InvalidUrl(format!("'{}' cannot be a base URL", self.base_url))
            })?
            .pop_if_empty()
            .extend([JSONAPI_PREFIX, self.entity.as_str(), self.bundle.as_str()]);

        if let Some((field, value)) = &self.filter {
            url.query_pairs_mut()
                .append_pair(&format!("filter[{}]", field), value);
        }

        Ok(url)
    }
}
