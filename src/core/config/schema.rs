//! core::config::schema
//!
//! Configuration file schema.
//!
//! # Location
//!
//! Searched in order:
//! 1. `$IDC_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/idc/config.toml`
//! 3. `~/.idc/config.toml`
//!
//! # Validation
//!
//! Values are validated after parsing: the base URL must be an absolute
//! `http` or `https` URL and the timeout must be positive.

use reqwest::Url;
use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Contents of a config file.
///
/// # Example
///
/// ```toml
/// base_url = "https://islandora-idc.traefik.me"
/// timeout_secs = 30
///
/// [auth]
/// username = "admin"
/// password = "password"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    /// Origin of the Drupal site
    pub base_url: Option<String>,

    /// HTTP request timeout in seconds
    pub timeout_secs: Option<u64>,

    /// Basic auth credentials
    pub auth: Option<AuthConfig>,
}

impl ConfigFile {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(base_url) = &self.base_url {
            validate_base_url(base_url)?;
        }

        if self.timeout_secs == Some(0) {
            return Err(ConfigError::InvalidValue(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }

        if let Some(auth) = &self.auth {
            auth.validate()?;
        }

        Ok(())
    }
}

/// Basic auth settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AuthConfig {
    pub username: Option<String>,

    /// Plain-text password; prefer `IDC_PASSWORD`
    pub password: Option<String>,
}

impl AuthConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(username) = &self.username {
            if username.is_empty() {
                return Err(ConfigError::InvalidValue(
                    "auth.username cannot be empty".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// Check that `value` is an absolute http(s) URL.
pub fn validate_base_url(value: &str) -> Result<(), ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidValue(format!("invalid base_url '{}': {}", value, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ConfigError::InvalidValue(format!(
            "invalid base_url '{}': scheme must be http or https, not '{}'",
            value, other
        ))),
    }
}
