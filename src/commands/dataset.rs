// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Dataset load report command

use serde::Serialize;

use crate::cli::args::OutputFormat;
use crate::dataset::{Dataset, DatasetCache};
use crate::error::Result;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DatasetInfo {
    path: String,
    loaded_at: String,
    rows_read: usize,
    records: usize,
    skipped_blank: usize,
    duplicates: usize,
    unique_presets: usize,
}

/// Execute the dataset command
pub fn execute(cache: &DatasetCache, format: &OutputFormat) -> Result<()> {
    let dataset = cache.get()?;
    println!("{}", render(&dataset, format)?);
    Ok(())
}

pub fn render(dataset: &Dataset, format: &OutputFormat) -> Result<String> {
    let report = dataset.report();
    let info = DatasetInfo {
        path: dataset.source().display().to_string(),
        loaded_at: dataset.loaded_at().to_rfc3339(),
        rows_read: report.rows_read,
        records: report.records,
        skipped_blank: report.skipped_blank,
        duplicates: report.duplicates,
        unique_presets: report.records - report.duplicates,
    };

    if matches!(format, OutputFormat::Json) {
        return Ok(serde_json::to_string_pretty(&info)?);
    }

    let mut lines = vec![
        format!("Dataset: {}", info.path),
        format!("Loaded:  {}", info.loaded_at),
        format!("Rows:    {}", info.rows_read),
        format!("Presets: {} ({} unique)", info.records, info.unique_presets),
    ];
    if info.skipped_blank > 0 {
        lines.push(format!(
            "Skipped: {} row(s) without CPU, GPU or RAM",
            info.skipped_blank
        ));
    }
    if info.duplicates > 0 {
        lines.push(format!(
            "Duplicates: {} row(s) repeat an earlier preset and are never matched",
            info.duplicates
        ));
    }
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{HardwareRecord, Payload};

    fn dataset() -> Dataset {
        Dataset::from_records(
            vec![
                HardwareRecord::new("i5-12400F", "RTX 3060 Ti", "16GB", Payload::default()),
                HardwareRecord::new("i5 12600K", "rtx 3060 ti", "16 GB", Payload::default()),
            ],
            "presets.csv",
        )
    }

    #[test]
    fn test_render_text_reports_duplicates() {
        let text = render(&dataset(), &OutputFormat::Text).unwrap();
        assert!(text.starts_with("Dataset: presets.csv\n"));
        assert!(text.contains("Presets: 2 (1 unique)"));
        assert!(text.contains("Duplicates: 1 row(s)"));
        assert!(!text.contains("Skipped"));
    }

    #[test]
    fn test_render_json() {
        let json = render(&dataset(), &OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["rowsRead"], 2);
        assert_eq!(value["uniquePresets"], 1);
        assert!(value["loadedAt"].as_str().is_some());
    }
}
