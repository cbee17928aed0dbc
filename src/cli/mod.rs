//! cli
//!
//! Command-line interface for `idc`.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Install the tracing subscriber
//! - Merge file, environment and flag configuration
//! - Delegate to command handlers
//!
//! The CLI layer is thin. Fetching and decoding live in [`crate::jsonapi`]
//! and [`crate::model`].

pub mod args;
pub mod commands;

pub use args::{Cli, Command};

use anyhow::{Context as _, Result};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use crate::core::config::{Config, Overrides};

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    init_tracing(cli.debug);

    let loaded = Config::load().context("Failed to load config")?;
    for warning in &loaded.warnings {
        warn!(path = %warning.path.display(), "{}", warning.message);
    }
    let mut config = loaded.config;

    let password = if cli.password_prompt {
        Some(rpassword::prompt_password("Password: ").context("Failed to read password")?)
    } else {
        None
    };
    config
        .apply_overrides(Overrides {
            base_url: cli.base_url.clone(),
            username: cli.username.clone(),
            password,
        })
        .context("Invalid command-line option")?;
    if let Some(message) = config.credentials_warning() {
        warn!("{}", message);
    }

    let ctx = commands::Context { config };
    commands::dispatch(cli.command, &ctx)
}

/// Install a stderr subscriber filtered by `RUST_LOG`.
///
/// `--debug` forces the `debug` level. Without either, only warnings and
/// errors are shown.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    // A second install (e.g. from tests) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
