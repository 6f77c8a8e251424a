//! Configuration loading and parsing

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main application configuration (loaded from config.toml)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub input: InputConfig,
    #[serde(default)]
    pub identification: IdentificationConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InputConfig {
    /// Capture files to identify, one session each
    pub logs: Vec<PathBuf>,
    /// Brand catalog files (JSON)
    pub catalogs: Vec<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IdentificationConfig {
    /// Optional starting candidate list; legacy spellings are resolved
    /// before use. Defaults to every fingerprinted platform.
    #[serde(default)]
    pub candidates: Option<Vec<String>>,

    /// Stop feeding a capture after this many frames (0 = no limit)
    #[serde(default)]
    pub max_frames: usize,

    /// Keep processing a capture after a malformed line instead of aborting
    #[serde(default = "default_true")]
    pub skip_bad_lines: bool,
}

impl Default for IdentificationConfig {
    fn default() -> Self {
        Self {
            candidates: None,
            max_frames: 0,
            skip_bad_lines: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Load and parse a TOML configuration file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {:?}", path))?;
    let config: AppConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file {:?}", path))?;
    Ok(config)
}
