// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CLI argument definitions using Clap
//!
//! Defines all command-line arguments and subcommands for rigpreset.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::normalize::HardwareKind;

/// rigpreset - game settings presets for your CPU, GPU and RAM
#[derive(Parser, Debug)]
#[command(name = "rigpreset")]
#[command(version, about = "Look up game settings presets for your hardware")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Preset table (CSV or JSON); overrides $RIGPRESET_DATASET and settings
    #[arg(long, global = true)]
    pub dataset: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find the preset for a CPU, GPU and RAM combination
    #[command(alias = "lookup")]
    Find(FindArgs),

    /// List the CPUs, GPUs and RAM sizes the dataset knows about
    Options,

    /// Show what was loaded from the dataset
    Dataset,

    /// Print the matching key for a descriptor
    #[command(hide = true)]
    Normalize {
        /// Descriptor kind
        kind: HardwareKind,

        /// Free-text descriptor
        text: String,
    },

    /// Manage configuration
    #[command(alias = "config")]
    Settings(SettingsArgs),
}

/// Arguments for the find subcommand
#[derive(clap::Args, Debug, Default)]
pub struct FindArgs {
    /// Processor, e.g. "Intel Core i5-12400F"
    #[arg(long)]
    pub cpu: String,

    /// Graphics card, e.g. "RTX 3060 Ti 8GB"
    #[arg(long)]
    pub gpu: String,

    /// Memory size, e.g. "16GB"
    #[arg(long)]
    pub ram: String,

    /// Write the profile to a file (default: cs2_profile.txt)
    #[arg(long, num_args = 0..=1, default_missing_value = crate::profile::DEFAULT_PROFILE_FILE)]
    pub save: Option<PathBuf>,

    /// List near-miss presets when nothing matches exactly
    #[arg(long)]
    pub suggest: bool,
}

/// Arguments for the settings subcommand
#[derive(clap::Args, Debug)]
pub struct SettingsArgs {
    #[command(subcommand)]
    pub command: Option<SettingsCommands>,
}

/// Settings subcommands
#[derive(Subcommand, Debug)]
pub enum SettingsCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., "dataset.path", "lookup.suggestions")
        key: String,

        /// Value to set
        value: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
    },

    /// Reset to defaults
    Reset,
}

/// Output format for responses
#[derive(ValueEnum, Clone, Debug, Default, PartialEq)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Text,

    /// JSON output
    Json,
}
