//! jsonapi
//!
//! Client side of Drupal's JSON:API module.
//!
//! # Architecture
//!
//! The `Transport` trait is the single seam to the network. The resolver
//! builds queries with [`JsonApiUrl`], sends them through a transport, and
//! decodes the result.
//!
//! # Modules
//!
//! - `traits`: `Transport` trait, `Credentials`, `JsonApiError`
//! - `url`: filtered collection query builder
//! - [`http`]: reqwest transport
//! - [`mock`]: in-memory transport for deterministic testing
//! - `resolver`: reference resolution
//!
//! # Example
//!
//! ```ignore
//! use idc_jsonapi::core::config::Config;
//! use idc_jsonapi::jsonapi::Resolver;
//! use idc_jsonapi::model::JsonApiCollection;
//!
//! let config = Config::load()?.config;
//! let resolver = Resolver::from_config(&config)?;
//!
//! let collection: JsonApiCollection = resolver.resolve(&member_of).await?;
//! println!("{}", collection.single().unwrap().attributes.title);
//! ```

pub mod http;
pub mod mock;
mod resolver;
mod traits;
mod url;

pub use http::HttpTransport;
pub use resolver::{ResolveOptions, Resolver, DEFAULT_BASE_URL};
pub use traits::*;
pub use url::{JsonApiUrl, ID_FILTER};
