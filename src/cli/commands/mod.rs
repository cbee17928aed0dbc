//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Async Commands
//!
//! `get` and `related` perform network I/O and are async. The dispatch
//! function builds a tokio runtime and blocks on them, so the rest of the
//! CLI stays synchronous.

mod config_cmd;
mod get;
mod related;

pub use config_cmd::show as config_show;
pub use get::get;
pub use related::related;

use anyhow::{Context as _, Result};
use serde_json::Value;

use super::args::Command;
use crate::core::config::Config;

/// Everything a command handler needs from the global flags.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Effective configuration after env and flag overrides
    pub config: Config,
}

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Get { resource_type, id } => {
            block_on(get::get(ctx, resource_type, &id))
        }
        Command::Related {
            resource_type,
            id,
            field,
        } => block_on(related::related(ctx, resource_type, &id, &field)),
        Command::Config => config_cmd::show(ctx),
    }
}

fn block_on<F: std::future::Future<Output = Result<()>>>(future: F) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    runtime.block_on(future)
}

/// Print a JSON document to stdout.
fn print_json(value: &Value) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("Failed to format JSON")?;
    println!("{}", text);
    Ok(())
}
