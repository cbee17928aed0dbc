//! idc-jsonapi - Typed JSON:API access to an Islandora repository
//!
//! An Islandora site built on Drupal exposes its content (repository
//! objects, collections, media, files and taxonomy terms) through JSON:API.
//! Resources point at each other through relationship references that carry
//! only a type and an id. This crate decodes those documents into typed
//! records and resolves references into the resources they name.
//!
//! # Architecture
//!
//! - [`core`] - Resource types, references and configuration
//! - [`jsonapi`] - URL construction, transports and the reference resolver
//! - [`model`] - Typed document shapes for every resource kind
//! - [`cli`] - The `idc` command-line interface
//!
//! # Guarantees
//!
//! 1. Resolving a reference succeeds only if exactly one resource matches
//! 2. Transport failures and result-count failures are distinct errors
//! 3. A missing relationship metadata key never panics

pub mod cli;
pub mod core;
pub mod jsonapi;
pub mod model;
