// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Load-once dataset cache
//!
//! The first `get()` reads the file; later calls share the same
//! `Arc<Dataset>`. `invalidate()` drops it so the next `get()` reads again.

use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use super::Dataset;
use crate::error::Result;

/// Process-wide read-only holder for the preset table
pub struct DatasetCache {
    path: PathBuf,
    slot: RwLock<Option<Arc<Dataset>>>,
}

impl DatasetCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            slot: RwLock::new(None),
        }
    }

    /// Path the dataset is (re)loaded from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Return the cached dataset, loading it on first access.
    pub fn get(&self) -> Result<Arc<Dataset>> {
        {
            let slot = self.slot.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(dataset) = slot.as_ref() {
                return Ok(Arc::clone(dataset));
            }
        }

        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        // Another caller may have loaded while we waited for the write lock
        if let Some(dataset) = slot.as_ref() {
            return Ok(Arc::clone(dataset));
        }

        let dataset = Arc::new(Dataset::load(&self.path)?);
        *slot = Some(Arc::clone(&dataset));
        Ok(dataset)
    }

    /// Forget the cached dataset; the next `get()` reloads from disk.
    pub fn invalidate(&self) {
        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        if slot.take().is_some() {
            tracing::debug!("Dropped cached dataset for {}", self.path.display());
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}
