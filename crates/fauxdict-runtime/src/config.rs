use crate::{Error, Result};
use fauxdict_engine::DEFAULT_SCROLL_THRESHOLD;
use fauxdict_types::DEFAULT_LIST_FIELD;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Name of the payload file looked up in the data directory when no source is configured
pub const DEFAULT_SOURCE_FILE: &str = "words.json";

/// Resolve the data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. FAUXDICT_PATH environment variable (with tilde expansion)
/// 3. System data directory (recommended default)
/// 4. ~/.fauxdict (fallback for systems without standard data directory)
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    // Priority 1: Explicit path
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    // Priority 2: FAUXDICT_PATH environment variable
    if let Ok(env_path) = std::env::var("FAUXDICT_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    // Priority 3: System data directory
    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("fauxdict"));
    }

    // Priority 4: ~/.fauxdict
    if let Some(home) = dirs::home_dir() {
        return Ok(home.join(".fauxdict"));
    }

    Err(Error::Config(
        "Could not determine data directory: no HOME directory or system data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

fn default_list_field() -> String {
    DEFAULT_LIST_FIELD.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_batch_delay_ms() -> u64 {
    400
}

fn default_scroll_threshold() -> u64 {
    DEFAULT_SCROLL_THRESHOLD
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// URL or path of the payload; defaults to `<data_dir>/words.json`
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default = "default_list_field")]
    pub list_field: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            location: None,
            list_field: default_list_field(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagingConfig {
    #[serde(default = "default_batch_delay_ms")]
    pub batch_delay_ms: u64,
    #[serde(default = "default_scroll_threshold")]
    pub scroll_threshold: u64,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            batch_delay_ms: default_batch_delay_ms(),
            scroll_threshold: default_scroll_threshold(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub paging: PagingConfig,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn path_in(data_dir: &Path) -> PathBuf {
        data_dir.join("config.toml")
    }

    /// Source location to fetch, falling back to the payload file in `data_dir`
    pub fn source_location(&self, data_dir: &Path) -> String {
        match &self.source.location {
            Some(location) => location.clone(),
            None => data_dir.join(DEFAULT_SOURCE_FILE).display().to_string(),
        }
    }

    pub fn with_source_override(mut self, location: Option<String>) -> Self {
        if location.is_some() {
            self.source.location = location;
        }
        self
    }

    pub fn batch_delay(&self) -> Duration {
        Duration::from_millis(self.paging.batch_delay_ms)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.source.timeout_secs)
    }
}
