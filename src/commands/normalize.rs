// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Key diagnostic command

use serde::Serialize;

use crate::cli::args::OutputFormat;
use crate::error::Result;
use crate::normalize::HardwareKind;

#[derive(Serialize)]
struct NormalizeOutput<'a> {
    kind: HardwareKind,
    input: &'a str,
    key: String,
}

/// Execute the normalize command
pub fn execute(kind: HardwareKind, text: &str, format: &OutputFormat) -> Result<()> {
    println!("{}", render(kind, text, format)?);
    Ok(())
}

pub fn render(kind: HardwareKind, text: &str, format: &OutputFormat) -> Result<String> {
    let key = kind.normalize(text);
    if matches!(format, OutputFormat::Json) {
        let output = NormalizeOutput {
            kind,
            input: text,
            key,
        };
        return Ok(serde_json::to_string_pretty(&output)?);
    }
    Ok(key)
}
