//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by reference.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `GANTRY_DEFAULTS__PORT=9000`
//! 3. Config file: `--config FILE`, else `.gantry.toml` in the current
//!    directory, else the user config file
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

/// File name of the per-directory config.
pub const LOCAL_CONFIG: &str = ".gantry.toml";

const ENV_PREFIX: &str = "GANTRY";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for generated projects.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
    /// Template settings.
    pub templates: TemplateConfig,
    /// Model parser settings.
    pub parser: ParserConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Port written into generated projects.
    pub port: String,
    /// Prepended to the project name to form the Go module path.
    pub module_prefix: Option<String>,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            port: "8080".into(),
            module_prefix: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "human".into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Directory of `<id>.tmpl` overrides applied to every run.
    pub local_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// `tag` or `substring`.
    pub required_rule: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            required_rule: "tag".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration, layering files and environment over defaults.
    ///
    /// `config_file` is the path passed via `--config`; when given it must
    /// exist.  Otherwise the user and local config files are read if present.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        let mut builder = Config::builder();

        match config_file {
            Some(path) => {
                builder =
                    builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
            }
            None => {
                if let Some(user) = Self::user_config_path() {
                    builder = builder
                        .add_source(File::from(user).format(FileFormat::Toml).required(false));
                }
                builder = builder.add_source(
                    File::from(Path::new(LOCAL_CONFIG))
                        .format(FileFormat::Toml)
                        .required(false),
                );
            }
        }

        let config = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .context("failed to read configuration")?;

        config
            .try_deserialize()
            .context("invalid configuration values")
    }

    /// Path of the configuration file in effect.
    ///
    /// A local `.gantry.toml` wins over the user config file.
    pub fn config_path() -> PathBuf {
        let local = PathBuf::from(LOCAL_CONFIG);
        if local.is_file() {
            return local;
        }
        Self::user_config_path().unwrap_or(local)
    }

    /// `config.toml` inside the platform's config directory for Gantry.
    pub fn user_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "gantry", "gantry")
            .map(|d| d.config_dir().join("config.toml"))
    }

    /// Look up a dotted key such as `defaults.port`.
    pub fn get(&self, key: &str) -> Option<serde_json::Value> {
        let mut value = serde_json::to_value(self).ok()?;
        for part in key.split('.') {
            value = value.get(part)?.clone();
        }
        Some(value)
    }
}
