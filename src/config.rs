//! Application configuration.
//!
//! Read from `config.toml` (explicit path, else the platform config dir). A
//! missing file means defaults. Environment variables override the API
//! settings so keys never have to live in the file.

use crate::engine::config::{BootConfig, GlitchConfig, RevealConfig};
use crate::engine::{OracleError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const APP_DIR: &str = "glitch-oracle";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Remote narrative settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NarrativeConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout_secs: u64,
    pub max_retries: u32,
    pub retry_backoff_ms: u64,
    /// Never call out, always use the local template.
    pub offline: bool,
}

impl Default for NarrativeConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            max_retries: 2,
            retry_backoff_ms: 500,
            offline: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    pub cards_dir: PathBuf,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            cards_dir: PathBuf::from("assets/cards"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub glitch: GlitchConfig,
    pub reveal: RevealConfig,
    pub boot: BootConfig,
    pub narrative: NarrativeConfig,
    pub assets: AssetsConfig,
    /// Extra glitch vocabulary merged over the built-in table.
    pub vocabulary: BTreeMap<String, String>,
    pub log_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Loads from `path`, or from the default location when `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => match default_config_path() {
                Some(path) => Self::load_from(&path),
                None => Ok(Self::default()),
            },
        }
    }

    /// Returns defaults if the file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents).map_err(|source| OracleError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Applies `GEMINI_API_KEY` / `GOOGLE_API_KEY` and `GEMINI_BASE_URL`.
    pub fn apply_env(&mut self) {
        self.apply_env_from(|key| std::env::var(key).ok());
    }

    pub fn apply_env_from<F>(&mut self, get: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| get(key).filter(|value| !value.trim().is_empty());

        if let Some(key) = non_empty("GEMINI_API_KEY").or_else(|| non_empty("GOOGLE_API_KEY")) {
            self.narrative.api_key = Some(key);
        }
        if let Some(url) = non_empty("GEMINI_BASE_URL") {
            self.narrative.base_url = url.trim().to_string();
        }
    }

    pub fn log_dir(&self) -> PathBuf {
        self.log_dir
            .clone()
            .or_else(|| dirs::cache_dir().map(|dir| dir.join(APP_DIR)))
            .unwrap_or_else(std::env::temp_dir)
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
}
