//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! `[modules]` table becomes the core's [`ModulesConfig`]; everything else
//! only concerns the CLI.
//!
//! # Resolution order (highest priority first)
//!
//! 1. Environment variables prefixed `STRATA__` (`STRATA__MODULES__BASE_PATH`)
//! 2. Project file: `--config FILE`, else `strata.toml` in the working directory
//! 3. User file in the platform config directory
//! 4. Built-in defaults (always present)

use std::path::PathBuf;

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use strata_core::domain::ModulesConfig;

use crate::cli::OutputFormat;

/// Project configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "strata.toml";

/// Prefix of configuration environment variables.
const ENV_PREFIX: &str = "STRATA";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Module layout.
    pub modules: ModulesConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// Used when `--output-format` is left at `auto`.
    pub format: OutputFormat,
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// `config_file` is the path passed via `--config`. Missing files are
    /// not an error; a file that exists but does not parse is.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let project = Self::project_file(config_file);
        debug!(path = %project.display(), "Loading configuration");

        let mut builder = Config::builder().add_source(
            Config::try_from(&Self::default()).context("Failed to stage default configuration")?,
        );

        if let Some(user) = Self::user_file() {
            builder = builder.add_source(File::from(user).format(FileFormat::Toml).required(false));
        }

        let config = builder
            .add_source(
                File::from(project.as_path())
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", project.display()))?;

        config
            .try_deserialize()
            .with_context(|| format!("Invalid configuration in {}", project.display()))
    }

    /// The project configuration file in effect.
    pub fn project_file(config_file: Option<&PathBuf>) -> PathBuf {
        config_file
            .cloned()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    /// Per-user configuration file, when the platform has a config directory.
    pub fn user_file() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "strata", "strata")
            .map(|d| d.config_dir().join("config.toml"))
    }

    /// Configuration rendered as TOML, as written by `strata publish`.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Look up a dotted key such as `modules.base_path`.
    ///
    /// Strings are returned bare; everything else as compact JSON.
    pub fn get(&self, key: &str) -> Option<String> {
        let root = serde_json::to_value(self).ok()?;
        let value = key
            .split('.')
            .try_fold(&root, |node, segment| node.get(segment))?;

        Some(match value {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }
}
