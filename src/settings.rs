//! Editor settings with persistence
//!
//! Settings are saved to `~/.config/warchief/settings.toml`

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use warchief_game::SentienceThresholds;

/// All editor settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    pub sentience: SentienceThresholds,
    pub preview: PreviewSettings,
}

impl EditorSettings {
    /// Get the config directory path
    fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("warchief"))
    }

    /// Get the settings file path
    pub fn settings_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("settings.toml"))
    }

    /// Load settings from the user config directory, or defaults if not found
    pub fn load() -> anyhow::Result<Self> {
        let Some(path) = Self::settings_path() else {
            warn!("Could not determine config directory, using defaults");
            return Ok(Self::default());
        };
        Self::load_from(&path)
    }

    /// Load settings from `path`.
    ///
    /// A missing file yields defaults. A file that exists but cannot be
    /// read or parsed is an error, so a typo never silently resets the
    /// thresholds.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            info!("No settings file found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {:?}", path))?;
        let settings = toml::from_str(&content)
            .with_context(|| format!("Failed to parse settings file {:?}", path))?;
        info!("Loaded settings from {:?}", path);
        Ok(settings)
    }

    /// Save settings to the user config directory
    pub fn save(&self) -> anyhow::Result<()> {
        let Some(path) = Self::settings_path() else {
            anyhow::bail!("Could not determine config directory");
        };
        self.save_to(&path)
    }

    /// Save settings to `path`, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir)
                    .with_context(|| format!("Failed to create {:?}", dir))?;
            }
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).with_context(|| format!("Failed to write {:?}", path))?;
        info!("Saved settings to {:?}", path);
        Ok(())
    }
}

/// What the balance preview prints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewSettings {
    /// Log the individual score terms for each ability
    pub log_breakdowns: bool,
    /// Score every ability under every stance
    pub stances: bool,
}

impl Default for PreviewSettings {
    fn default() -> Self {
        Self {
            log_breakdowns: false,
            stances: true,
        }
    }
}
