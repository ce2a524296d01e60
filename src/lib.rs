// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! rigpreset - game settings presets keyed by CPU, GPU and RAM.
//!
//! Architecture highlights:
//! - `normalize`: free-text hardware descriptors to canonical keys
//! - `dataset`: the static preset table, its loader and load-once cache
//! - `lookup`: exact key matching with optional near-miss hints
//! - `profile`: terminal and plain-text renderings of a preset
//! - `cli`, `commands`, `config`: the `rigpreset` binary's surface

pub mod cli;
pub mod commands;
pub mod config;
pub mod dataset;
pub mod error;
pub mod lookup;
pub mod normalize;
pub mod profile;

pub use error::{PresetError, Result};
