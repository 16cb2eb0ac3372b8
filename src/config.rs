//! Configuration loading and saving.
//!
//! The config lives at `<config dir>/lrp/config.toml`. A missing file
//! means defaults; unknown keys are ignored so older binaries keep
//! working with newer files.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::player::clock::{MAX_SPEED, MIN_SPEED};

/// User configuration for the player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default playback speed multiplier
    pub speed: f64,
    /// Rows each lyric line occupies in the viewport
    pub line_height: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            speed: 1.0,
            line_height: 2,
        }
    }
}

impl Config {
    /// Path to the config file.
    pub fn config_path() -> Result<PathBuf> {
        let base = dirs::config_dir().context("Could not determine the config directory")?;
        Ok(base.join("lrp").join("config.toml"))
    }

    /// Load the config, falling back to defaults when the file does not
    /// exist. Values are normalized into their valid ranges.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config.normalized())
    }

    /// Write the config to its default location, creating parent
    /// directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }
        let toml_str = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&path, toml_str)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }

    /// Clamp fields into their valid ranges.
    pub fn normalized(mut self) -> Self {
        self.speed = if self.speed.is_finite() {
            self.speed.clamp(MIN_SPEED, MAX_SPEED)
        } else {
            1.0
        };
        self.line_height = self.line_height.max(1);
        self
    }
}
