//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default simulated submit latency in milliseconds
const DEFAULT_SUBMIT_DELAY_MS: u64 = 400;
/// Default character used to mask password input
const DEFAULT_MASK_CHAR: char = '•';
/// Default minimum input width before inputs stack vertically
const DEFAULT_MIN_FIELD_WIDTH: u16 = 30;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// How long the logging submit handler takes, in milliseconds
    pub submit_delay_ms: Option<u64>,
    /// Character shown for each password character
    pub mask_char: Option<char>,
    /// Minimum width of an input before a form row stacks its inputs
    pub min_field_width: Option<u16>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "userdesk", "userdesk-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration, writing the defaults on first run so the
    /// available settings are discoverable
    pub fn load_or_init() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_or_init_at(&path),
            None => Ok(Self::default()),
        }
    }

    /// Every setting spelled out with its default value
    pub fn with_defaults() -> Self {
        Self {
            submit_delay_ms: Some(DEFAULT_SUBMIT_DELAY_MS),
            mask_char: Some(DEFAULT_MASK_CHAR),
            min_field_width: Some(DEFAULT_MIN_FIELD_WIDTH),
        }
    }

    fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: TuiConfig = serde_json::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    fn load_or_init_at(path: &Path) -> Result<Self> {
        if path.exists() {
            return Self::load_from(path);
        }
        let config = Self::with_defaults();
        config.save_to(path)?;
        tracing::info!(path = %path.display(), "wrote default config");
        Ok(config)
    }

    fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms.unwrap_or(DEFAULT_SUBMIT_DELAY_MS))
    }

    pub fn mask_char(&self) -> char {
        self.mask_char.unwrap_or(DEFAULT_MASK_CHAR)
    }

    pub fn min_field_width(&self) -> u16 {
        self.min_field_width.unwrap_or(DEFAULT_MIN_FIELD_WIDTH).max(1)
    }
}
