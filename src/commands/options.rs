// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Hardware options command

use crate::cli::args::OutputFormat;
use crate::dataset::{DatasetCache, HardwareOptions};
use crate::error::Result;

/// Execute the options command
pub fn execute(cache: &DatasetCache, format: &OutputFormat) -> Result<()> {
    let dataset = cache.get()?;
    println!("{}", render(&dataset.options(), format)?);
    Ok(())
}

pub fn render(options: &HardwareOptions, format: &OutputFormat) -> Result<String> {
    if matches!(format, OutputFormat::Json) {
        return Ok(serde_json::to_string_pretty(options)?);
    }

    let mut out = String::new();
    for (title, values) in [
        ("CPUs", &options.cpus),
        ("GPUs", &options.gpus),
        ("RAM", &options.rams),
    ] {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&format!("{} ({}):\n", title, values.len()));
        for value in values {
            out.push_str(&format!("  - {}\n", value));
        }
    }
    Ok(out.trim_end().to_string())
}
