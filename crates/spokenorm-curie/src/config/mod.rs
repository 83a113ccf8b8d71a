//! Configuration loading for spokenorm.
//! Reads spokenorm.toml from the current directory or the path in the
//! SPOKENORM_CONFIG env var. The translation tables are not configurable.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

const CONFIG_ENV: &str = "SPOKENORM_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "spokenorm.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub resolver: ResolverConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Return identifiers already in SPOKE format without asking the normalizer.
    #[serde(default = "bool_true")]
    pub skip_acceptable: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self { skip_acceptable: bool_true() }
    }
}

fn bool_true() -> bool { true }

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive; RUST_LOG takes precedence.
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: default_filter() }
    }
}

fn default_filter() -> String { "info".to_string() }


impl Config {
    fn path() -> String {
        std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
    }

    /// Load configuration from spokenorm.toml.
    /// Checks SPOKENORM_CONFIG env var first, then current directory.
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::path();

        if !Path::new(&path).exists() {
            anyhow::bail!(
                "Config file not found: {}\n\
                 Set {} or create spokenorm.toml in the working directory.",
                path,
                CONFIG_ENV
            );
        }

        Self::from_file(&path)
    }

    /// Like [`Config::load`], but falls back to defaults when no file exists.
    pub fn load_or_default() -> anyhow::Result<Self> {
        let path = Self::path();
        if !Path::new(&path).exists() {
            tracing::debug!(path = %path, "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::from_file(&path)
    }

    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_toml_str(&content).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }
}
