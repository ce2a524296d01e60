// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Preset lookup
//!
//! A query is normalized with the same rules as the dataset rows and matched
//! by exact key equality. When nothing matches, near-miss suggestions can be
//! listed as a hint; they are never returned as the match.

use serde::Serialize;
use strsim::jaro_winkler;

use crate::config::LookupConfig;
use crate::dataset::{Dataset, HardwareRecord, RecordKey};

/// Raw hardware descriptors as typed by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub cpu: String,
    pub gpu: String,
    pub ram: String,
}

impl Query {
    pub fn new(cpu: impl Into<String>, gpu: impl Into<String>, ram: impl Into<String>) -> Self {
        Self {
            cpu: cpu.into(),
            gpu: gpu.into(),
            ram: ram.into(),
        }
    }

    /// Canonical key for matching.
    pub fn key(&self) -> RecordKey {
        RecordKey::from_descriptors(&self.cpu, &self.gpu, &self.ram)
    }
}

/// A record that nearly matched a query
#[derive(Debug, Clone, Serialize)]
pub struct Suggestion<'a> {
    pub record: &'a HardwareRecord,
    pub score: f64,
}

/// Result of a lookup. A miss is an ordinary outcome, not an error.
#[derive(Debug, Clone)]
pub enum LookupOutcome<'a> {
    Found(&'a HardwareRecord),
    NotFound { suggestions: Vec<Suggestion<'a>> },
}

impl<'a> LookupOutcome<'a> {
    pub fn record(&self) -> Option<&'a HardwareRecord> {
        match self {
            LookupOutcome::Found(record) => Some(*record),
            LookupOutcome::NotFound { .. } => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, LookupOutcome::Found(_))
    }
}

/// Look up the preset for `query`.
///
/// Suggestions are only computed on a miss and only when `config.suggestions`
/// is enabled.
pub fn lookup<'a>(dataset: &'a Dataset, query: &Query, config: &LookupConfig) -> LookupOutcome<'a> {
    let key = query.key();
    tracing::debug!(
        "Lookup key cpu='{}' gpu='{}' ram='{}'",
        key.cpu,
        key.gpu,
        key.ram
    );

    if let Some(record) = dataset.find(&key) {
        return LookupOutcome::Found(record);
    }

    let suggestions = if config.suggestions {
        suggest(dataset, &key, config)
    } else {
        Vec::new()
    };
    tracing::debug!("No exact match; {} suggestion(s)", suggestions.len());
    LookupOutcome::NotFound { suggestions }
}

/// Rank reachable records by mean Jaro-Winkler similarity to `key`.
///
/// Highest score first; equal scores keep dataset order.
pub fn suggest<'a>(dataset: &'a Dataset, key: &RecordKey, config: &LookupConfig) -> Vec<Suggestion<'a>> {
    let mut ranked: Vec<Suggestion<'a>> = dataset
        .reachable()
        .map(|record| Suggestion {
            record,
            score: similarity(key, record.key()),
        })
        .filter(|suggestion| suggestion.score >= config.min_similarity)
        .collect();

    // sort_by is stable
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked.truncate(config.max_suggestions);
    ranked
}

/// Mean similarity of the three key components, 0.0 to 1.0.
pub fn similarity(a: &RecordKey, b: &RecordKey) -> f64 {
    (jaro_winkler(&a.cpu, &b.cpu) + jaro_winkler(&a.gpu, &b.gpu) + jaro_winkler(&a.ram, &b.ram))
        / 3.0
}
