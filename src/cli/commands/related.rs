//! cli::commands::related
//!
//! Resolve every reference held in one relationship field.
//!
//! The primary resource is decoded as a [`GenericDocument`] so that any
//! field of any kind can be followed. Each reference is resolved against the
//! origin named by the relationship's `links.related.href` when the server
//! sends one, and against the configured base URL otherwise.

use anyhow::{anyhow, bail, Context as _, Result};
use serde_json::Value;
use tracing::debug;

use super::{print_json, Context};
use crate::core::types::{DrupalType, ResourceRef};
use crate::jsonapi::{ResolveOptions, Resolver};
use crate::model::GenericDocument;

pub async fn related(
    ctx: &Context,
    resource_type: DrupalType,
    id: &str,
    field: &str,
) -> Result<()> {
    let reference = ResourceRef::new(resource_type, id).context("Invalid resource reference")?;
    let resolver = Resolver::from_config(&ctx.config).context("Failed to create client")?;

    let document: GenericDocument = resolver
        .resolve(&reference)
        .await
        .with_context(|| format!("Failed to resolve {}", reference))?;
    let resource = document
        .single()
        .ok_or_else(|| anyhow!("{} did not resolve to a single resource", reference))?;

    let Some(relationship) = resource.relationships.get(field) else {
        let known: Vec<&str> = resource.relationships.keys().map(String::as_str).collect();
        bail!(
            "{} has no relationship '{}' (available: {})",
            reference,
            field,
            known.join(", ")
        );
    };

    let mut options = ResolveOptions::new();
    if let Some(origin) = relationship.related_origin() {
        debug!(origin = %origin, "resolving against related link origin");
        options = options.origin(origin);
    }

    let entries = relationship.data.entries();
    if entries.is_empty() {
        eprintln!("{} has no references in '{}'", reference, field);
        return Ok(());
    }

    for entry in entries {
        let target: &ResourceRef = entry;
        let document: Value = resolver
            .resolve_with(target, &options)
            .await
            .with_context(|| format!("Failed to resolve {}", target))?;
        print_json(&document)?;
    }
    Ok(())
}
