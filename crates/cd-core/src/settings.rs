//! Layered configuration.
//!
//! [`Settings`] is assembled from, in increasing priority:
//! 1. the serde defaults declared below,
//! 2. an optional TOML file (`courtdays.toml`, or an explicit path),
//! 3. environment variables prefixed with `COURTDAYS__`
//!    (e.g. `COURTDAYS__RULES__PATH`).
//!
//! There is no global instance: `main` builds one and passes it down.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::errors::Result;
use crate::utilities::DateFormat;

/// Default configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "courtdays";

/// Top-level settings.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct Settings {
    /// Holiday rule source.
    #[serde(default)]
    pub rules: RulesConfig,
    /// Output rendering.
    #[serde(default)]
    pub output: OutputConfig,
    /// Logging defaults.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Settings {
    /// Load settings.  When `path` is `None` the default file is optional;
    /// an explicit path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(p) => File::from(p).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };
        let config = Config::builder()
            .add_source(file)
            .add_source(Environment::with_prefix("COURTDAYS").separator("__"))
            .build()?;
        Ok(config.try_deserialize()?)
    }

    /// Parse settings from a TOML string, without consulting the environment.
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        let config = Config::builder()
            .add_source(File::from_str(toml, config::FileFormat::Toml))
            .build()?;
        Ok(config.try_deserialize()?)
    }
}

/// Where the holiday rules come from.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RulesConfig {
    /// Path of the CSV rule file.
    #[serde(default = "default_rules_path")]
    pub path: PathBuf,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            path: default_rules_path(),
        }
    }
}

fn default_rules_path() -> PathBuf {
    PathBuf::from("data/california_courts.csv")
}

/// Output rendering options.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct OutputConfig {
    /// Date style used when printing results.
    #[serde(default)]
    pub date_format: DateFormat,
}

/// Logging defaults, used when `RUST_LOG` is not set.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `"info"` or `"cd_time=debug"`.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
