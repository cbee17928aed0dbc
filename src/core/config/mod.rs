//! core::config
//!
//! Configuration loading.
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Config file
//! 3. Environment (`BASE_URL`, `IDC_USERNAME`, `IDC_PASSWORD`)
//! 4. CLI flags (applied through [`Config::apply_overrides`])
//!
//! # Config File Locations
//!
//! Searched in order:
//! 1. `$IDC_CONFIG` if set (a missing file is reported as a warning)
//! 2. `$XDG_CONFIG_HOME/idc/config.toml`
//! 3. `~/.idc/config.toml`
//!
//! The environment is read only while loading. The loaded [`Config`] is a
//! plain value handed to [`crate::jsonapi::Resolver::from_config`].
//!
//! # Example
//!
//! ```no_run
//! use idc_jsonapi::core::config::Config;
//!
//! let result = Config::load().unwrap();
//! let config = result.config;
//!
//! println!("Base URL: {}", config.base_url());
//! if let Some((username, _)) = config.credentials() {
//!     println!("Authenticating as {}", username);
//! }
//! ```

pub mod schema;

pub use schema::{AuthConfig, ConfigFile};

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::jsonapi::DEFAULT_BASE_URL;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "IDC_CONFIG";
/// Environment variable overriding the base URL.
pub const BASE_URL_ENV: &str = "BASE_URL";
/// Environment variable overriding the basic auth username.
pub const USERNAME_ENV: &str = "IDC_USERNAME";
/// Environment variable overriding the basic auth password.
pub const PASSWORD_ENV: &str = "IDC_PASSWORD";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Warnings generated during config loading.
#[derive(Debug, Clone)]
pub struct ConfigWarning {
    /// The warning message.
    pub message: String,
    /// The path that triggered the warning.
    pub path: PathBuf,
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    /// The loaded configuration.
    pub config: Config,
    /// Any warnings generated during loading.
    pub warnings: Vec<ConfigWarning>,
}

/// Values that override the config file.
///
/// Filled from the environment by [`Config::load`] and from CLI flags by
/// the command layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl Overrides {
    /// Read overrides through `lookup` (normally `std::env::var`).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());
        Self {
            base_url: non_empty(BASE_URL_ENV),
            username: non_empty(USERNAME_ENV),
            password: non_empty(PASSWORD_ENV),
        }
    }

    /// Layer `other` on top of `self`.
    fn merge(&mut self, other: Overrides) {
        if other.base_url.is_some() {
            self.base_url = other.base_url;
        }
        if other.username.is_some() {
            self.username = other.username;
        }
        if other.password.is_some() {
            self.password = other.password;
        }
    }
}

/// Merged configuration from all sources.
///
/// Accessor methods apply the precedence rules.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Parsed config file (default if none was found)
    pub file: ConfigFile,
    /// Environment and CLI overrides
    pub overrides: Overrides,
    /// Path to the config file (if loaded)
    file_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default locations and the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read, parsed,
    /// or validated, or if `BASE_URL` is not a valid URL.
    /// A missing config file is not an error (defaults are used).
    pub fn load() -> Result<ConfigLoadResult, ConfigError> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Load configuration, reading environment variables through `lookup`.
    pub fn load_with(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<ConfigLoadResult, ConfigError> {
        let mut warnings = Vec::new();

        let file_path = Self::find_config_file(&lookup, &mut warnings);
        let file = match &file_path {
            Some(path) => Self::read_config_file(path)?,
            None => ConfigFile::default(),
        };
        file.validate()?;

        if let (Some(path), Some(auth)) = (&file_path, &file.auth) {
            if auth.password.is_some() {
                warnings.push(ConfigWarning {
                    message: format!(
                        "Password stored in plain text. Consider setting {} instead",
                        PASSWORD_ENV
                    ),
                    path: path.clone(),
                });
            }
        }

        let overrides = Overrides::from_lookup(&lookup);
        if let Some(base_url) = &overrides.base_url {
            schema::validate_base_url(base_url)?;
        }

        Ok(ConfigLoadResult {
            config: Config {
                file,
                overrides,
                file_path,
            },
            warnings,
        })
    }

    /// Build a config from a specific file, ignoring the environment.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let file = Self::read_config_file(path)?;
        file.validate()?;
        Ok(Config {
            file,
            overrides: Overrides::default(),
            file_path: Some(path.to_path_buf()),
        })
    }

    /// Locate the config file, if any.
    ///
    /// A `$IDC_CONFIG` that names a missing file is reported as a warning
    /// before the search falls back to the default locations.
    fn find_config_file(
        lookup: &impl Fn(&str) -> Option<String>,
        warnings: &mut Vec<ConfigWarning>,
    ) -> Option<PathBuf> {
        // 1. Check $IDC_CONFIG
        if let Some(path) = lookup(CONFIG_ENV).filter(|p| !p.is_empty()) {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
            warnings.push(ConfigWarning {
                message: format!(
                    "{} names a file that does not exist; using the default locations",
                    CONFIG_ENV
                ),
                path,
            });
        }

        // 2. Check $XDG_CONFIG_HOME/idc/config.toml
        if let Some(xdg_home) = lookup("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("idc/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        // 3. Check ~/.idc/config.toml
        dirs::home_dir()
            .map(|home| home.join(".idc/config.toml"))
            .filter(|path| path.exists())
    }

    /// Read and parse a config file.
    fn read_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Layer CLI overrides on top of everything loaded so far.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the base URL override is not
    /// a valid http(s) URL.
    pub fn apply_overrides(&mut self, overrides: Overrides) -> Result<(), ConfigError> {
        if let Some(base_url) = &overrides.base_url {
            schema::validate_base_url(base_url)?;
        }
        self.overrides.merge(overrides);
        Ok(())
    }

    /// Origin of the Drupal site.
    ///
    /// Defaults to [`DEFAULT_BASE_URL`] if not configured.
    pub fn base_url(&self) -> String {
        self.overrides
            .base_url
            .clone()
            .or_else(|| self.file.base_url.clone())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }

    /// HTTP timeout, if configured.
    pub fn timeout_secs(&self) -> Option<u64> {
        self.file.timeout_secs
    }

    /// Basic auth username.
    pub fn username(&self) -> Option<&str> {
        self.overrides
            .username
            .as_deref()
            .or_else(|| self.file.auth.as_ref().and_then(|a| a.username.as_deref()))
    }

    fn password(&self) -> Option<&str> {
        self.overrides
            .password
            .as_deref()
            .or_else(|| self.file.auth.as_ref().and_then(|a| a.password.as_deref()))
    }

    /// Whether a password is available from any source.
    pub fn has_password(&self) -> bool {
        self.password().is_some()
    }

    /// Basic auth credentials, present whenever a username is configured.
    ///
    /// A username without a password is sent with an empty password.
    pub fn credentials(&self) -> Option<(String, String)> {
        let user = self.username()?;
        Some((user.to_string(), self.password().unwrap_or_default().to_string()))
    }

    /// Describe a half-configured credential pair, if there is one.
    pub fn credentials_warning(&self) -> Option<String> {
        match (self.username(), self.password()) {
            (Some(user), None) => Some(format!(
                "No password configured for '{}'; sending an empty password. Set {} or pass --password-prompt",
                user, PASSWORD_ENV
            )),
            (None, Some(_)) => Some(format!(
                "Password configured without a username; requests are anonymous. Set {} or pass --username",
                USERNAME_ENV
            )),
            _ => None,
        }
    }

    /// Get the path to the loaded config file.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }
}
