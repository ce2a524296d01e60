// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::path::PathBuf;

use crate::error::{PresetError, Result};

use super::Settings;

/// Keys accepted by `settings get` and `settings set`
pub const SETTING_KEYS: [&str; 4] = [
    "dataset.path",
    "lookup.suggestions",
    "lookup.max_suggestions",
    "lookup.min_similarity",
];

impl Settings {
    /// Check value ranges that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        let similarity = self.lookup.min_similarity;
        if !(0.0..=1.0).contains(&similarity) {
            return Err(PresetError::Config(format!(
                "lookup.min_similarity must be between 0.0 and 1.0, got {}",
                similarity
            )));
        }
        if self.lookup.max_suggestions == 0 {
            return Err(PresetError::Config(
                "lookup.max_suggestions must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Read a setting by dotted key.
    pub fn get(&self, key: &str) -> Result<String> {
        let value = match key {
            "dataset.path" => self
                .dataset
                .path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(not set)".to_string()),
            "lookup.suggestions" => self.lookup.suggestions.to_string(),
            "lookup.max_suggestions" => self.lookup.max_suggestions.to_string(),
            "lookup.min_similarity" => self.lookup.min_similarity.to_string(),
            _ => return Err(unknown_key(key)),
        };
        Ok(value)
    }

    /// Update a setting by dotted key. The result is validated before it is kept.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut updated = self.clone();
        match key {
            "dataset.path" => {
                let value = value.trim();
                updated.dataset.path = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            "lookup.suggestions" => {
                updated.lookup.suggestions = value.trim().parse().map_err(|_| {
                    PresetError::InvalidInput(format!("Invalid boolean: {}", value))
                })?;
            }
            "lookup.max_suggestions" => {
                updated.lookup.max_suggestions = value.trim().parse().map_err(|_| {
                    PresetError::InvalidInput(format!("Invalid count: {}", value))
                })?;
            }
            "lookup.min_similarity" => {
                updated.lookup.min_similarity = value.trim().parse().map_err(|_| {
                    PresetError::InvalidInput(format!("Invalid similarity: {}", value))
                })?;
            }
            _ => return Err(unknown_key(key)),
        }

        updated.validate()?;
        *self = updated;
        Ok(())
    }
}

fn unknown_key(key: &str) -> PresetError {
    PresetError::InvalidInput(format!(
        "Unknown setting: {} (expected one of: {})",
        key,
        SETTING_KEYS.join(", ")
    ))
}
