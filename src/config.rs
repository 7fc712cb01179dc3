//! Application configuration management.
//!
//! This module handles loading and saving the application configuration:
//! the content file and asset directory overrides, plus the motion and
//! mouse-capture preferences.
//!
//! Configuration is stored at `~/.config/folio-tui/config.json`.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Application name used for the config directory path
const APP_NAME: &str = "folio-tui";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Content file name looked up in the working directory when neither the
/// CLI nor the config names one
pub const DEFAULT_CONTENT_FILE: &str = "portfolio.json";

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Content file to load instead of `portfolio.json` in the working
    /// directory. A CLI argument overrides both.
    pub content_file: Option<PathBuf>,
    /// Asset directory override. Defaults to `assets/` beside the content
    /// file.
    pub asset_dir: Option<PathBuf>,
    /// Skip animations: reveals settle immediately and the decorative
    /// loops freeze.
    #[serde(default)]
    pub reduced_motion: bool,
    /// Capture mouse events (wheel scrolling, marquee hover pause).
    #[serde(default = "default_true")]
    pub mouse_capture: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            content_file: None,
            asset_dir: None,
            reduced_motion: false,
            mouse_capture: true,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            Ok(serde_json::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Resolve the content file path: CLI argument, then config, then the
    /// default name in the working directory.
    pub fn content_path(&self, cli_path: Option<&PathBuf>) -> PathBuf {
        cli_path
            .cloned()
            .or_else(|| self.content_file.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONTENT_FILE))
    }

    /// Resolve the asset directory for a given content file: the config
    /// override, or `assets/` beside the content file.
    pub fn asset_dir_for(&self, content_path: &std::path::Path) -> PathBuf {
        if let Some(dir) = &self.asset_dir {
            return dir.clone();
        }
        content_path
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("assets")
    }
}
