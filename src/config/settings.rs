// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Settings management for rigpreset
//!
//! Handles loading and saving settings from ~/.rigpreset/settings.json

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

mod io;
mod validation;

pub use io::{DATASET_ENV, HOME_ENV};
pub use validation::SETTING_KEYS;

/// Main settings structure, stored in ~/.rigpreset/settings.json
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Settings {
    /// Where the preset table lives
    #[serde(default)]
    pub dataset: DatasetConfig,

    /// Lookup behaviour
    #[serde(default)]
    pub lookup: LookupConfig,
}

/// Dataset location
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DatasetConfig {
    /// Path to the CSV or JSON preset table (None = <home>/presets.csv)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Lookup behaviour
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LookupConfig {
    /// List near-miss presets when nothing matches exactly
    #[serde(default)]
    pub suggestions: bool,

    /// Maximum number of near-miss presets to list
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,

    /// Minimum mean Jaro-Winkler similarity (0.0-1.0) for a near miss
    #[serde(default = "default_min_similarity")]
    pub min_similarity: f64,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            suggestions: false,
            max_suggestions: default_max_suggestions(),
            min_similarity: default_min_similarity(),
        }
    }
}

fn default_max_suggestions() -> usize {
    3
}

fn default_min_similarity() -> f64 {
    0.85
}
