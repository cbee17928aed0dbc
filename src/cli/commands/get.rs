//! cli::commands::get
//!
//! Fetch one resource and print it.
//!
//! # Example
//!
//! ```bash
//! idc get node--islandora_object 815a4c04-0be5-44f1-a876-e8ddc11dcf21
//! ```

use anyhow::{Context as _, Result};
use serde_json::Value;

use super::{print_json, Context};
use crate::core::types::{DrupalType, ResourceRef};
use crate::jsonapi::Resolver;

/// Resolve `<resource_type>/<id>` and print the document.
pub async fn get(ctx: &Context, resource_type: DrupalType, id: &str) -> Result<()> {
    let reference = ResourceRef::new(resource_type, id).context("Invalid resource reference")?;
    let resolver = Resolver::from_config(&ctx.config).context("Failed to create client")?;

    let document: Value = resolver
        .resolve(&reference)
        .await
        .with_context(|| format!("Failed to resolve {}", reference))?;

    print_json(&document)
}
