// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Preset dataset
//!
//! The dataset is a static table loaded once. Each row pairs a hardware
//! triple with a recommendation payload; the triple is normalized into a
//! `RecordKey` when the row is read and never changes afterwards.

pub mod cache;
pub mod columns;
mod loader;

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DatasetError, Result};
use crate::normalize::{normalize_cpu, normalize_gpu, normalize_ram};

pub use cache::DatasetCache;
pub use columns::Column;

/// Canonical key triple used for matching
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordKey {
    pub cpu: String,
    pub gpu: String,
    pub ram: String,
}

impl RecordKey {
    /// Normalize raw descriptors into a key.
    pub fn from_descriptors(cpu: &str, gpu: &str, ram: &str) -> Self {
        Self {
            cpu: normalize_cpu(cpu),
            gpu: normalize_gpu(gpu),
            ram: normalize_ram(ram),
        }
    }
}

/// Recommendation text carried by a record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payload {
    pub game_settings: String,
    pub launch_options: String,
    pub control_panel: String,
    pub windows_optimization: String,
    pub fps_estimate: String,
    pub source: String,
}

/// One dataset row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HardwareRecord {
    pub cpu: String,
    pub gpu: String,
    pub ram: String,
    #[serde(flatten)]
    pub payload: Payload,
    #[serde(skip)]
    key: RecordKey,
}

impl HardwareRecord {
    pub fn new(
        cpu: impl Into<String>,
        gpu: impl Into<String>,
        ram: impl Into<String>,
        payload: Payload,
    ) -> Self {
        let (cpu, gpu, ram) = (cpu.into(), gpu.into(), ram.into());
        let key = RecordKey::from_descriptors(&cpu, &gpu, &ram);
        Self {
            cpu,
            gpu,
            ram,
            payload,
            key,
        }
    }

    /// Matching key derived from the descriptors. Not for display.
    pub fn key(&self) -> &RecordKey {
        &self.key
    }
}

/// Counters collected while loading
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadReport {
    /// Data rows in the file (header excluded)
    pub rows_read: usize,
    /// Rows kept as records
    pub records: usize,
    /// Rows with all three descriptors empty
    pub skipped_blank: usize,
    /// Records whose key repeats an earlier record; unreachable by lookup
    pub duplicates: usize,
}

/// Distinct descriptors as written in the dataset, in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HardwareOptions {
    pub cpus: Vec<String>,
    pub gpus: Vec<String>,
    pub rams: Vec<String>,
}

/// Loaded, indexed preset table
#[derive(Debug)]
pub struct Dataset {
    records: Vec<HardwareRecord>,
    index: HashMap<RecordKey, usize>,
    source: PathBuf,
    loaded_at: DateTime<Utc>,
    report: LoadReport,
}

impl Dataset {
    /// Load and index the table at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DatasetError::NotFound(path.display().to_string()).into());
        }

        tracing::debug!("Loading preset dataset from {}", path.display());
        let table = loader::read_table(path)?;
        if table.records.is_empty() {
            return Err(DatasetError::Empty(path.display().to_string()).into());
        }
        if table.skipped_blank > 0 {
            tracing::warn!(
                "Skipped {} row(s) without CPU, GPU or RAM in {}",
                table.skipped_blank,
                path.display()
            );
        }

        let dataset = Self::build(table.records, path, table.rows_read, table.skipped_blank);
        tracing::debug!(
            "Indexed {} records ({} unique keys) from {}",
            dataset.records.len(),
            dataset.index.len(),
            path.display()
        );
        Ok(dataset)
    }

    /// Build a dataset from records already in memory.
    pub fn from_records(records: Vec<HardwareRecord>, source: impl Into<PathBuf>) -> Self {
        let rows = records.len();
        Self::build(records, source, rows, 0)
    }

    fn build(
        records: Vec<HardwareRecord>,
        source: impl Into<PathBuf>,
        rows_read: usize,
        skipped_blank: usize,
    ) -> Self {
        let source = source.into();
        let mut index = HashMap::with_capacity(records.len());
        let mut duplicates = 0;

        for (position, record) in records.iter().enumerate() {
            if index.contains_key(record.key()) {
                duplicates += 1;
                continue;
            }
            index.insert(record.key().clone(), position);
        }

        if duplicates > 0 {
            tracing::warn!(
                "{} duplicate preset row(s) in {}; only the first of each is used",
                duplicates,
                source.display()
            );
        }

        let report = LoadReport {
            rows_read,
            records: records.len(),
            skipped_blank,
            duplicates,
        };

        Self {
            records,
            index,
            source,
            loaded_at: Utc::now(),
            report,
        }
    }

    /// First record whose key equals `key`.
    pub fn find(&self, key: &RecordKey) -> Option<&HardwareRecord> {
        self.index.get(key).map(|&position| &self.records[position])
    }

    /// Records that lookup can reach: the first of each key, in file order.
    pub fn reachable(&self) -> impl Iterator<Item = &HardwareRecord> {
        self.records
            .iter()
            .enumerate()
            .filter(|(position, record)| self.index.get(record.key()) == Some(position))
            .map(|(_, record)| record)
    }

    /// Distinct CPU, GPU and RAM values for selection lists.
    pub fn options(&self) -> HardwareOptions {
        fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
            let mut seen = HashSet::new();
            values
                .filter(|value| !value.is_empty())
                .filter(|value| seen.insert(*value))
                .map(str::to_string)
                .collect()
        }

        HardwareOptions {
            cpus: distinct(self.records.iter().map(|r| r.cpu.as_str())),
            gpus: distinct(self.records.iter().map(|r| r.gpu.as_str())),
            rams: distinct(self.records.iter().map(|r| r.ram.as_str())),
        }
    }

    pub fn records(&self) -> &[HardwareRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn report(&self) -> &LoadReport {
        &self.report
    }
}
