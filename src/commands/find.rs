// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Preset lookup command

use std::path::Path;

use serde::Serialize;

use crate::cli::args::{FindArgs, OutputFormat};
use crate::config::LookupConfig;
use crate::dataset::{DatasetCache, HardwareRecord};
use crate::error::Result;
use crate::lookup::{lookup, LookupOutcome, Query, Suggestion};
use crate::profile::{render_profile, render_summary};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FindOutput<'a> {
    found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    preset: Option<&'a HardwareRecord>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    suggestions: Vec<SuggestionOutput<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    saved_to: Option<String>,
}

#[derive(Serialize)]
struct SuggestionOutput<'a> {
    cpu: &'a str,
    gpu: &'a str,
    ram: &'a str,
    score: f64,
}

/// Execute the find command
pub fn execute(
    args: &FindArgs,
    cache: &DatasetCache,
    config: &LookupConfig,
    format: &OutputFormat,
) -> Result<()> {
    let dataset = cache.get()?;
    let config = LookupConfig {
        suggestions: config.suggestions || args.suggest,
        ..config.clone()
    };

    let query = Query::new(args.cpu.as_str(), args.gpu.as_str(), args.ram.as_str());
    let outcome = lookup(&dataset, &query, &config);

    let saved_to = match (outcome.record(), args.save.as_deref()) {
        (Some(record), Some(path)) => {
            save_profile(record, path)?;
            Some(path)
        }
        (None, Some(path)) => {
            tracing::warn!("No preset matched; not writing {}", path.display());
            None
        }
        _ => None,
    };

    println!("{}", render(&query, &outcome, saved_to, format)?);
    Ok(())
}

/// Write the plain-text profile for `record` to `path`.
pub fn save_profile(record: &HardwareRecord, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, render_profile(record))?;
    tracing::debug!("Wrote profile to {}", path.display());
    Ok(())
}

/// Render a lookup outcome for the terminal or as JSON.
pub fn render(
    query: &Query,
    outcome: &LookupOutcome<'_>,
    saved_to: Option<&Path>,
    format: &OutputFormat,
) -> Result<String> {
    if matches!(format, OutputFormat::Json) {
        let output = FindOutput {
            found: outcome.is_found(),
            preset: outcome.record(),
            suggestions: match outcome {
                LookupOutcome::NotFound { suggestions } => {
                    suggestions.iter().map(suggestion_output).collect()
                }
                LookupOutcome::Found(_) => Vec::new(),
            },
            saved_to: saved_to.map(|p| p.display().to_string()),
        };
        return Ok(serde_json::to_string_pretty(&output)?);
    }

    let mut lines = Vec::new();
    match outcome {
        LookupOutcome::Found(record) => {
            lines.push(render_summary(record));
            if let Some(path) = saved_to {
                lines.push(String::new());
                lines.push(format!("Profile saved to {}", path.display()));
            }
        }
        LookupOutcome::NotFound { suggestions } => {
            lines.push(format!(
                "No preset found for {} / {} / {}.",
                query.cpu, query.gpu, query.ram
            ));
            if suggestions.is_empty() {
                lines.push("Run `rigpreset options` to see the hardware the dataset covers.".to_string());
            } else {
                lines.push(String::new());
                lines.push("Closest presets:".to_string());
                for suggestion in suggestions {
                    let record = suggestion.record;
                    lines.push(format!(
                        "  {} / {} / {} ({:.0}% similar)",
                        record.cpu,
                        record.gpu,
                        record.ram,
                        suggestion.score * 100.0
                    ));
                }
            }
        }
    }
    Ok(lines.join("\n"))
}

fn suggestion_output<'a>(suggestion: &Suggestion<'a>) -> SuggestionOutput<'a> {
    SuggestionOutput {
        cpu: &suggestion.record.cpu,
        gpu: &suggestion.record.gpu,
        ram: &suggestion.record.ram,
        score: suggestion.score,
    }
}
