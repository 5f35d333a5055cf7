use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::HalcyonError;
use crate::snapshot::ExportFormat;

const DEFAULT_CONFIG: &str = include_str!("../../../config/default.toml");

/// Settings for exporting the constants to other toolchains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    pub export: ExportSection,
    pub css: CssSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportSection {
    pub format: ExportFormat,
    pub pretty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CssSection {
    /// Prepended to every custom property name, e.g. `hc-` gives `--hc-page-width`.
    pub prefix: String,
}

impl ExportConfig {
    /// Load config: user file (if exists), otherwise built-in defaults.
    pub fn load() -> Result<Self, HalcyonError> {
        let user_path = Self::config_path();
        if user_path.exists() {
            Self::load_from(&user_path)
        } else {
            tracing::debug!("No config at {}, using defaults", user_path.display());
            Self::parse(DEFAULT_CONFIG)
        }
    }

    /// Load config from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, HalcyonError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::parse(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save current config to the user config file.
    pub fn save(&self) -> Result<(), HalcyonError> {
        self.save_to(&Self::config_path())
    }

    /// Save config to an explicit path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), HalcyonError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| HalcyonError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        tracing::debug!("Saved config to {}", path.display());
        Ok(())
    }

    /// Path to user config file (XDG on Linux, AppData on Windows).
    pub fn config_path() -> PathBuf {
        ProjectDirs::from("", "", "halcyon")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }

    fn parse(content: &str) -> Result<Self, HalcyonError> {
        toml::from_str(content).map_err(|e| HalcyonError::Config(e.to_string()))
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self::parse(DEFAULT_CONFIG).expect("built-in default config is valid TOML")
    }
}
