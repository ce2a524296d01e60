// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Error types for rigpreset
//!
//! A lookup that finds nothing is not an error; see `lookup::LookupOutcome`.
//! Everything here is a real fault: the dataset could not be read, the
//! settings are invalid, or the user passed something unusable.

use thiserror::Error;

/// Main error type for rigpreset operations
#[derive(Error, Debug)]
pub enum PresetError {
    /// Dataset could not be turned into records
    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV parsing errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Dataset-specific error types
#[derive(Error, Debug)]
pub enum DatasetError {
    /// No file at the resolved dataset path
    #[error("no dataset at {0} (pass --dataset or set dataset.path)")]
    NotFound(String),

    /// A required descriptor column is absent from the header
    #[error("missing required column '{column}' in {path}")]
    MissingColumn { column: &'static str, path: String },

    /// The file parsed but is not a table of rows
    #[error("unsupported dataset shape: {0}")]
    UnsupportedShape(String),

    /// The file holds no usable rows
    #[error("dataset {0} contains no rows")]
    Empty(String),
}

/// Result type alias for rigpreset operations
pub type Result<T> = std::result::Result<T, PresetError>;
