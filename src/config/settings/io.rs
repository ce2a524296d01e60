// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::path::{Path, PathBuf};

use crate::error::Result;

use super::Settings;

/// Environment override for the settings directory
pub const HOME_ENV: &str = "RIGPRESET_HOME";

/// Environment override for the dataset path
pub const DATASET_ENV: &str = "RIGPRESET_DATASET";

impl Settings {
    /// Get the default settings file path.
    pub fn default_path() -> PathBuf {
        Self::home().join("settings.json")
    }

    /// Load settings from the default path.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Load settings from a specific path. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&content)?;
        tracing::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Save settings to the default path.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::default_path())
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the rigpreset home directory (~/.rigpreset or $RIGPRESET_HOME).
    pub fn home() -> PathBuf {
        if let Ok(home) = std::env::var(HOME_ENV) {
            return PathBuf::from(home);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rigpreset")
    }

    /// Resolve where the dataset should be read from.
    ///
    /// Priority: explicit flag > $RIGPRESET_DATASET > `dataset.path` > <home>/presets.csv
    pub fn dataset_path(&self, flag: Option<&Path>) -> PathBuf {
        if let Some(path) = flag {
            return path.to_path_buf();
        }
        if let Ok(path) = std::env::var(DATASET_ENV) {
            if !path.trim().is_empty() {
                return PathBuf::from(path);
            }
        }
        self.dataset
            .path
            .clone()
            .unwrap_or_else(|| Self::home().join("presets.csv"))
    }
}
