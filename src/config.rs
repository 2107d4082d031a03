//! User configuration for the `kt` command.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use dirs::config_dir;
use knowledgetrace_core::{SortKey, DEFAULT_AUTHOR_LIMIT, DEFAULT_RELATED_LIMIT};
use serde::{Deserialize, Serialize};

const APP_NAME: &str = "knowledgetrace";
const CONFIG_FILE: &str = "config.json";

/// Environment variable naming the catalog export to read.
pub const DATA_ENV: &str = "KNOWLEDGETRACE_DATA";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Catalog export used when neither `--data` nor the environment names one.
    pub data_path: Option<PathBuf>,
    /// Listing order when `--sort` is not given.
    pub default_sort: SortKey,
    /// Number of related projects shown.
    pub related_limit: usize,
    /// Number of other works by the same author shown.
    pub author_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: None,
            default_sort: SortKey::default(),
            related_limit: DEFAULT_RELATED_LIMIT,
            author_limit: DEFAULT_AUTHOR_LIMIT,
        }
    }
}

impl Config {
    /// Load configuration from the user's config directory.
    /// Returns the default config if the file is missing or fails to parse.
    pub fn load() -> Self {
        let loaded = get_config_path().and_then(|path| Self::load_from(&path));
        match loaded {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load config, using defaults: {:#}", e);
                Self::default()
            }
        }
    }

    /// Load configuration from an explicit file. A missing file yields defaults.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).context("Failed to read config file")?;
        let config = serde_json::from_str(&content).context("Failed to parse config file")?;
        tracing::debug!(path = %path.display(), "loaded config");

        Ok(config)
    }

    /// Resolve the catalog path: explicit flag, then environment, then config.
    pub fn resolve_data_path(
        &self,
        flag: Option<PathBuf>,
        env: Option<String>,
    ) -> Result<PathBuf> {
        flag.or_else(|| env.filter(|v| !v.trim().is_empty()).map(PathBuf::from))
            .or_else(|| self.data_path.clone())
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "No catalog file given: pass --data, set {}, or set data_path in {}",
                    DATA_ENV,
                    CONFIG_FILE
                )
            })
    }
}

fn get_config_path() -> Result<PathBuf> {
    let mut path =
        config_dir().ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
    path.push(APP_NAME);
    path.push(CONFIG_FILE);
    Ok(path)
}
