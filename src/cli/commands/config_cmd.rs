//! config command - Show the effective configuration

use anyhow::Result;

use super::Context;
use crate::core::config::Config;

const REDACTED: &str = "********";
const NOT_SET: &str = "(not set)";

/// Print the effective configuration with the password redacted.
pub fn show(ctx: &Context) -> Result<()> {
    print!("{}", render(&ctx.config));
    Ok(())
}

fn render(config: &Config) -> String {
    let mut out = String::from("# Effective configuration\n");

    let file = config
        .loaded_from()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(none)".to_string());
    out.push_str(&format!("config_file = {}\n", file));
    out.push_str(&format!("base_url = {}\n", config.base_url()));
    out.push_str(&format!(
        "timeout_secs = {}\n",
        config
            .timeout_secs()
            .map(|t| t.to_string())
            .unwrap_or_else(|| NOT_SET.to_string())
    ));
    out.push_str(&format!(
        "auth.username = {}\n",
        config.username().unwrap_or(NOT_SET)
    ));
    out.push_str(&format!(
        "auth.password = {}\n",
        if config.has_password() { REDACTED } else { NOT_SET }
    ));
    out
}
