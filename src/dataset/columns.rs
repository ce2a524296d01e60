// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Column-name normalization for dataset headers
//!
//! Preset sheets are maintained by hand, so headers drift: "Game Settings",
//! "game_settings", "GAME-SETTINGS " and "Settings" all name the same column.

use std::collections::HashMap;
use std::path::Path;

use crate::error::{DatasetError, Result};

/// A column the dataset loader understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Cpu,
    Gpu,
    Ram,
    GameSettings,
    LaunchOptions,
    ControlPanel,
    WindowsOptimization,
    FpsEstimate,
    Source,
}

impl Column {
    /// Descriptor columns every dataset must carry
    pub const REQUIRED: [Column; 3] = [Column::Cpu, Column::Gpu, Column::Ram];

    /// Canonical snake_case name
    pub fn canonical_name(self) -> &'static str {
        match self {
            Column::Cpu => "cpu",
            Column::Gpu => "gpu",
            Column::Ram => "ram",
            Column::GameSettings => "game_settings",
            Column::LaunchOptions => "launch_options",
            Column::ControlPanel => "control_panel",
            Column::WindowsOptimization => "windows_optimization",
            Column::FpsEstimate => "fps_estimate",
            Column::Source => "source",
        }
    }

    /// Resolve a raw header (any casing, spacing or punctuation) to a column.
    pub fn from_header(header: &str) -> Option<Column> {
        match normalize_header(header).as_str() {
            "cpu" | "processor" => Some(Column::Cpu),
            "gpu" | "video_card" | "graphics_card" => Some(Column::Gpu),
            "ram" | "memory" => Some(Column::Ram),
            "game_settings" | "settings" | "graphics_settings" => Some(Column::GameSettings),
            "launch_options" | "launch" | "launch_params" | "launch_parameters" => {
                Some(Column::LaunchOptions)
            }
            "control_panel" | "driver_panel" | "driver_settings" => Some(Column::ControlPanel),
            "windows_optimization" | "os_tweaks" | "windows_tweaks" => {
                Some(Column::WindowsOptimization)
            }
            "fps_estimate" | "fps" | "expected_fps" => Some(Column::FpsEstimate),
            "source" | "citation" => Some(Column::Source),
            _ => None,
        }
    }
}

/// Trim, lowercase and turn every run of non-alphanumerics into `_`.
pub fn normalize_header(header: &str) -> String {
    let mut normalized = String::with_capacity(header.len());
    let mut pending_separator = false;

    for ch in header.trim().chars().flat_map(char::to_lowercase) {
        if ch.is_alphanumeric() {
            if pending_separator && !normalized.is_empty() {
                normalized.push('_');
            }
            pending_separator = false;
            normalized.push(ch);
        } else {
            pending_separator = true;
        }
    }

    normalized
}

/// Header position of each recognized column
#[derive(Debug, Clone, Default)]
pub struct ColumnMap {
    positions: HashMap<Column, usize>,
}

impl ColumnMap {
    /// Map headers to columns. The first header resolving to a column wins;
    /// unknown headers are ignored.
    pub fn from_headers<'a, I>(headers: I, path: &Path) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut positions = HashMap::new();
        for (index, header) in headers.into_iter().enumerate() {
            match Column::from_header(header) {
                Some(column) => {
                    positions.entry(column).or_insert(index);
                }
                None => tracing::debug!("Ignoring unknown dataset column '{}'", header),
            }
        }

        let map = Self { positions };
        map.require_descriptors(path)?;
        Ok(map)
    }

    /// Fail unless every descriptor column is present.
    pub fn require_descriptors(&self, path: &Path) -> Result<()> {
        for column in Column::REQUIRED {
            if !self.positions.contains_key(&column) {
                return Err(DatasetError::MissingColumn {
                    column: column.canonical_name(),
                    path: path.display().to_string(),
                }
                .into());
            }
        }
        Ok(())
    }

    pub fn position(&self, column: Column) -> Option<usize> {
        self.positions.get(&column).copied()
    }
}
