//! jsonapi::resolver
//!
//! Resolution of relationship references into fully fetched resources.
//!
//! # Design
//!
//! A [`ResourceRef`] names a resource by type and id. Resolving it issues one
//! filtered collection query, `GET <origin>/jsonapi/<entity>/<bundle>?filter[id]=<id>`,
//! requires the result set to hold exactly one resource, and decodes the
//! document into whatever type the caller asks for.
//!
//! The origin defaults to the resolver's configured base URL. Callers that
//! know where the referencing resource came from (for example from a
//! relationship's `links.related.href`) pass that origin per call through
//! [`ResolveOptions`].
//!
//! # Example
//!
//! ```ignore
//! use idc_jsonapi::jsonapi::Resolver;
//! use idc_jsonapi::model::JsonApiIslandoraObj;
//!
//! let resolver = Resolver::from_config(&config)?;
//! let object: JsonApiIslandoraObj = resolver.resolve(&reference).await?;
//! for creator in &object.single().unwrap().relationships.creators.data {
//!     println!("{:?}", creator.meta_string("rel_type"));
//! }
//! ```

use std::sync::Arc;
use std::time::Duration;

use reqwest::Url;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::http::HttpTransport;
use super::traits::{Credentials, JsonApiError, Transport};
use super::url::JsonApiUrl;
use crate::core::config::Config;
use crate::core::types::ResourceRef;

/// Origin used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://islandora-idc.traefik.me";

/// Per-call overrides for a resolve.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Origin to query instead of the resolver's base URL
    pub origin: Option<Url>,
    /// Credentials to send instead of the resolver's defaults
    pub credentials: Option<Credentials>,
}

impl ResolveOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Query `origin` instead of the configured base URL.
    pub fn origin(mut self, origin: Url) -> Self {
        self.origin = Some(origin);
        self
    }

    /// Authenticate with HTTP Basic credentials.
    pub fn basic_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.credentials = Some(Credentials::new(username, password));
        self
    }
}

/// Resolves references against a JSON:API origin.
///
/// Cheap to clone; clones share the transport.
#[derive(Clone)]
pub struct Resolver {
    transport: Arc<dyn Transport>,
    base_url: Url,
    credentials: Option<Credentials>,
}

impl std::fmt::Debug for Resolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver")
            .field("transport", &self.transport.name())
            .field("base_url", &self.base_url.as_str())
            .field("credentials", &self.credentials)
            .finish()
    }
}

impl Resolver {
    /// Create a resolver over `transport` rooted at `base_url`.
    pub fn new(transport: Arc<dyn Transport>, base_url: Url) -> Self {
        Self {
            transport,
            base_url,
            credentials: None,
        }
    }

    /// Create an HTTP resolver from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns `JsonApiError::InvalidUrl` if the configured base URL does
    /// not parse, or `JsonApiError::Network` if the HTTP client cannot be
    /// built.
    pub fn from_config(config: &Config) -> Result<Self, JsonApiError> {
        let base_url = Url::parse(&config.base_url())
            .map_err(|e| JsonApiError::InvalidUrl(format!("'{}': {}", config.base_url(), e)))?;

        let transport = match config.timeout_secs() {
            Some(secs) => HttpTransport::with_timeout(Duration::from_secs(secs))?,
            None => HttpTransport::new(),
        };

        let mut resolver = Self::new(Arc::new(transport), base_url);
        if let Some((username, password)) = config.credentials() {
            resolver = resolver.with_credentials(Credentials::new(username, password));
        }
        Ok(resolver)
    }

    /// Send `credentials` with every request that does not override them.
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Resolve `reference` using the configured origin and credentials.
    pub async fn resolve<T: DeserializeOwned>(
        &self,
        reference: &ResourceRef,
    ) -> Result<T, JsonApiError> {
        self.resolve_with(reference, &ResolveOptions::default()).await
    }

    /// Resolve `reference`, authenticating with the supplied credentials.
    pub async fn resolve_with_basic_auth<T: DeserializeOwned>(
        &self,
        reference: &ResourceRef,
        username: &str,
        password: &str,
    ) -> Result<T, JsonApiError> {
        let options = ResolveOptions::new().basic_auth(username, password);
        self.resolve_with(reference, &options).await
    }

    /// Resolve `reference` with per-call overrides.
    ///
    /// Issues exactly one request.
    ///
    /// # Errors
    ///
    /// - Transport failures as reported by the [`Transport`]
    /// - `NotExactlyOne` if the filtered query matched zero or several resources
    /// - `Decode` if the document does not fit `T`
    pub async fn resolve_with<T: DeserializeOwned>(
        &self,
        reference: &ResourceRef,
        options: &ResolveOptions,
    ) -> Result<T, JsonApiError> {
        let origin = options.origin.as_ref().unwrap_or(&self.base_url);
        let credentials = options.credentials.as_ref().or(self.credentials.as_ref());

        tracing::debug!(%reference, %origin, "resolving reference");
        let query = JsonApiUrl::for_reference(origin, reference);
        self.get_single(&query, credentials).await
    }

    /// Run `query` and decode its single result.
    ///
    /// # Errors
    ///
    /// As for [`resolve_with`](Self::resolve_with), plus `InvalidUrl` if the
    /// query cannot be turned into a URL.
    pub async fn get_single<T: DeserializeOwned>(
        &self,
        query: &JsonApiUrl,
        credentials: Option<&Credentials>,
    ) -> Result<T, JsonApiError> {
        let url = query.to_url()?;
        let document = self.transport.get(&url, credentials).await?;

        let count = result_count(&document)?;
        tracing::debug!(%url, count, "query returned");
        if count != 1 {
            return Err(JsonApiError::NotExactlyOne {
                url: url.to_string(),
                count,
            });
        }

        serde_json::from_value(document).map_err(|e| JsonApiError::Decode(e.to_string()))
    }
}

/// Number of primary resources in a JSON:API document.
///
/// `data` is an array for collection routes and a single object (or `null`)
/// for individual routes.
fn result_count(document: &Value) -> Result<usize, JsonApiError> {
    match document.get("data") {
        Some(Value::Array(items)) => Ok(items.len()),
        Some(Value::Object(_)) => Ok(1),
        Some(Value::Null) => Ok(0),
        Some(other) => Err(JsonApiError::Decode(format!(
            "'data' must be an array or object, got {}",
            other
        ))),
        None => Err(JsonApiError::Decode(
            "document has no 'data' member".to_string(),
        )),
    }
}

impl ResourceRef {
    /// Resolve this reference with `resolver`'s defaults.
    ///
    /// Shorthand for [`Resolver::resolve`].
    pub async fn resolve<T: DeserializeOwned>(&self, resolver: &Resolver) -> Result<T, JsonApiError> {
        resolver.resolve(self).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jsonapi::mock::MockTransport;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct NameDoc {
        data: Vec<NameResource>,
    }

    #[derive(Debug, Deserialize)]
    struct NameResource {
        attributes: NameAttributes,
    }

    #[derive(Debug, Deserialize)]
    struct NameAttributes {
        name: String,
    }

    const GENRE_ID: &str = "4b6a9b5e-8f2a-4f33-bd6b-3c0a1f8f1f10";

    fn genre_ref() -> ResourceRef {
        ResourceRef::new("taxonomy_term--genre".parse().unwrap(), GENRE_ID).unwrap()
    }

    fn genre(id: &str) -> Value {
        json!({
            "type": "taxonomy_term--genre",
            "id": id,
            "attributes": {"name": "Photographs"}
        })
    }

    fn resolver_with(transport: &MockTransport) -> Resolver {
        Resolver::new(
            Arc::new(transport.clone()),
            Url::parse("http://drupal.test").unwrap(),
        )
    }

    mod resolve {
        use super::*;

        #[tokio::test]
        async fn decodes_single_result() {
            let transport = MockTransport::new();
            transport.insert(genre(GENRE_ID)).unwrap();

            let doc: NameDoc = resolver_with(&transport).resolve(&genre_ref()).await.unwrap();
            assert_eq!(doc.data[0].attributes.name, "Photographs");
        }

        #[tokio::test]
        async fn issues_one_request_for_the_reference() {
            let transport = MockTransport::new();
            transport.insert(genre(GENRE_ID)).unwrap();

            let _: NameDoc = resolver_with(&transport).resolve(&genre_ref()).await.unwrap();

            assert_eq!(transport.request_count(), 1);
            let request = transport.last_request().unwrap();
            assert_eq!(request.url.host_str(), Some("drupal.test"));
            assert_eq!(
                request.collection(),
                Some(("taxonomy_term".to_string(), "genre".to_string()))
            );
            assert_eq!(request.filter("id").as_deref(), Some(GENRE_ID));
        }

        #[tokio::test]
        async fn reference_shorthand_delegates() {
            let transport = MockTransport::new();
            transport.insert(genre(GENRE_ID)).unwrap();
            let resolver = resolver_with(&transport);

            let doc: NameDoc = genre_ref().resolve(&resolver).await.unwrap();
            assert_eq!(doc.data.len(), 1);
        }

        #[tokio::test]
        async fn zero_results_is_not_exactly_one() {
            let transport = MockTransport::new();

            let result: Result<NameDoc, _> = resolver_with(&transport).resolve(&genre_ref()).await;
            match result {
                Err(JsonApiError::NotExactlyOne { count, .. }) => assert_eq!(count, 0),
                other => panic!("expected NotExactlyOne, got {:?}", other),
            }
        }

        #[tokio::test]
        async fn many_results_is_not_exactly_one() {
            let transport = MockTransport::new();
            transport.insert(genre(GENRE_ID)).unwrap();
            transport.insert(genre(GENRE_ID)).unwrap();

            let err = resolver_with(&transport)
                .resolve::<NameDoc>(&genre_ref())
                .await
                .unwrap_err();
            assert!(matches!(err, JsonApiError::NotExactlyOne { count: 2, .. }));
            assert!(!err.is_transport());
        }

        #[tokio::test]
        async fn transport_failure_is_passed_through() {
            let transport = MockTransport::new();
            transport.fail_with(JsonApiError::Network("connection refused".into()));

            let err = resolver_with(&transport)
                .resolve::<NameDoc>(&genre_ref())
                .await
                .unwrap_err();
            assert!(err.is_transport());
            assert_eq!(transport.request_count(), 1);
        }

        #[tokio::test]
        async fn shape_mismatch_is_decode_error() {
            let transport = MockTransport::new();
            transport
                .insert(json!({
                    "type": "taxonomy_term--genre",
                    "id": GENRE_ID,
                    "attributes": {"name": 42}
                }))
                .unwrap();

            let err = resolver_with(&transport)
                .resolve::<NameDoc>(&genre_ref())
                .await
                .unwrap_err();
            assert!(matches!(err, JsonApiError::Decode(_)));
        }
    }

    mod credentials {
        use super::*;

        #[tokio::test]
        async fn omitted_by_default() {
            let transport = MockTransport::new();
            transport.insert(genre(GENRE_ID)).unwrap();

            let _: NameDoc = resolver_with(&transport).resolve(&genre_ref()).await.unwrap();
            assert!(transport.last_request().unwrap().credentials.is_none());
        }

        #[tokio::test]
        async fn basic_auth_is_attached() {
            let transport = MockTransport::new();
            transport.insert(genre(GENRE_ID)).unwrap();

            let _: NameDoc = resolver_with(&transport)
                .resolve_with_basic_auth(&genre_ref(), "admin", "islandora")
                .await
                .unwrap();
            assert_eq!(
                transport.last_request().unwrap().credentials,
                Some(Credentials::new("admin", "islandora"))
            );
        }

        #[tokio::test]
        async fn resolver_default_is_used() {
            let transport = MockTransport::new();
            transport.insert(genre(GENRE_ID)).unwrap();
            let resolver =
                resolver_with(&transport).with_credentials(Credentials::new("reader", "pw"));

            let _: NameDoc = resolver.resolve(&genre_ref()).await.unwrap();
            assert_eq!(
                transport.last_request().unwrap().credentials,
                Some(Credentials::new("reader", "pw"))
            );
        }

        #[tokio::test]
        async fn per_call_overrides_default() {
            let transport = MockTransport::new();
            transport.insert(genre(GENRE_ID)).unwrap();
            let resolver =
                resolver_with(&transport).with_credentials(Credentials::new("reader", "pw"));

            let options = ResolveOptions::new().basic_auth("admin", "islandora");
            let _: NameDoc = resolver.resolve_with(&genre_ref(), &options).await.unwrap();
            assert_eq!(
                transport.last_request().unwrap().credentials,
                Some(Credentials::new("admin", "islandora"))
            );
        }
    }

    mod origin {
        use super::*;

        #[tokio::test]
        async fn per_call_origin_overrides_base_url() {
            let transport = MockTransport::new();
            transport.insert(genre(GENRE_ID)).unwrap();

            let options =
                ResolveOptions::new().origin(Url::parse("https://other.example.org/site").unwrap());
            let _: NameDoc = resolver_with(&transport)
                .resolve_with(&genre_ref(), &options)
                .await
                .unwrap();

            let url = transport.last_request().unwrap().url;
            assert_eq!(url.host_str(), Some("other.example.org"));
            assert_eq!(url.path(), "/site/jsonapi/taxonomy_term/genre");
        }

        #[test]
        fn debug_does_not_expose_password() {
            let transport = MockTransport::new();
            let resolver =
                resolver_with(&transport).with_credentials(Credentials::new("admin", "hunter2"));
            let output = format!("{:?}", resolver);
            assert!(output.contains("mock"));
            assert!(output.contains("drupal.test"));
            assert!(!output.contains("hunter2"));
        }
    }

    mod result_count {
        use super::*;

        #[test]
        fn counts_array() {
            assert_eq!(result_count(&json!({"data": [{}, {}]})).unwrap(), 2);
        }

        #[test]
        fn object_counts_as_one() {
            assert_eq!(result_count(&json!({"data": {"id": "a"}})).unwrap(), 1);
        }

        #[test]
        fn null_counts_as_zero() {
            assert_eq!(result_count(&json!({"data": null})).unwrap(), 0);
        }

        #[test]
        fn missing_data_is_decode_error() {
            assert!(matches!(
                result_count(&json!({"errors": []})),
                Err(JsonApiError::Decode(_))
            ));
            assert!(matches!(
                result_count(&json!({"data": "x"})),
                Err(JsonApiError::Decode(_))
            ));
        }
    }
}
