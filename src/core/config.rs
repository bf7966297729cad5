use anyhow::{Context, Result};
use clap::ValueEnum;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::{fs, path::PathBuf};
use tracing::debug;

/// Which provider variant lookups go through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ProviderMode {
    /// Validate keys, cache by code, fail on invalid or unknown keys
    #[default]
    Strict,
    /// Skip validation and caching, report unknown keys as absent
    Tolerant,
}

impl Display for ProviderMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ProviderMode::Strict => "strict",
                ProviderMode::Tolerant => "tolerant",
            }
        )
    }
}

#[derive(Debug, Default, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub mode: ProviderMode,
    /// Custom dataset file; the bundled ISO 3166-1 dataset is used when unset.
    pub data_path: Option<String>,
}

impl AppConfig {
    /// Loads the config from the default location, falling back to defaults when no
    /// config file has been created yet.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!(
                "No config file at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("org", "iso3166", "countries")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }
}
