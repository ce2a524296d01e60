// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Reading preset tables from disk
//!
//! `.json` files hold an array of row objects; anything else is read as CSV
//! with a header row.

use std::collections::HashSet;
use std::path::Path;

use serde_json::Value;

use super::columns::{Column, ColumnMap};
use super::{HardwareRecord, Payload};
use crate::error::{DatasetError, Result};

/// Rows read from a file before indexing
#[derive(Debug, Default)]
pub(super) struct RawTable {
    pub records: Vec<HardwareRecord>,
    pub rows_read: usize,
    pub skipped_blank: usize,
}

impl RawTable {
    fn push_row<'a, F>(&mut self, value_of: F)
    where
        F: Fn(Column) -> &'a str,
    {
        self.rows_read += 1;

        let (cpu, gpu, ram) = (value_of(Column::Cpu), value_of(Column::Gpu), value_of(Column::Ram));
        if cpu.trim().is_empty() && gpu.trim().is_empty() && ram.trim().is_empty() {
            self.skipped_blank += 1;
            return;
        }

        let payload = Payload {
            game_settings: value_of(Column::GameSettings).trim().to_string(),
            launch_options: value_of(Column::LaunchOptions).trim().to_string(),
            control_panel: value_of(Column::ControlPanel).trim().to_string(),
            windows_optimization: value_of(Column::WindowsOptimization).trim().to_string(),
            fps_estimate: value_of(Column::FpsEstimate).trim().to_string(),
            source: value_of(Column::Source).trim().to_string(),
        };
        self.records
            .push(HardwareRecord::new(cpu.trim(), gpu.trim(), ram.trim(), payload));
    }
}

/// Read a table, picking the format from the file extension.
pub(super) fn read_table(path: &Path) -> Result<RawTable> {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if is_json {
        let content = std::fs::read_to_string(path)?;
        read_json(&content, path)
    } else {
        let reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_path(path)?;
        read_csv(reader, path)
    }
}

/// Read CSV rows from any reader.
pub(super) fn read_csv<R: std::io::Read>(mut reader: csv::Reader<R>, path: &Path) -> Result<RawTable> {
    let headers = reader.headers()?.clone();
    let columns = ColumnMap::from_headers(headers.iter(), path)?;

    let mut table = RawTable::default();
    for row in reader.records() {
        let row = row?;
        table.push_row(|column| {
            columns
                .position(column)
                .and_then(|index| row.get(index))
                .unwrap_or("")
        });
    }

    Ok(table)
}

/// Read a JSON array of row objects.
pub(super) fn read_json(content: &str, path: &Path) -> Result<RawTable> {
    let value: Value = serde_json::from_str(content)?;
    let rows = match value {
        Value::Array(rows) => rows,
        other => {
            return Err(DatasetError::UnsupportedShape(format!(
                "expected an array of rows in {}, found {}",
                path.display(),
                json_type_name(&other)
            ))
            .into());
        }
    };

    let mut seen_columns = HashSet::new();
    let mut converted = Vec::with_capacity(rows.len());
    for (index, row) in rows.into_iter().enumerate() {
        let Value::Object(fields) = row else {
            return Err(DatasetError::UnsupportedShape(format!(
                "row {} in {} is not an object",
                index + 1,
                path.display()
            ))
            .into());
        };

        let mut cells: Vec<(Column, String)> = Vec::new();
        for (header, cell) in fields {
            if let Some(column) = Column::from_header(&header) {
                // First header resolving to a column wins, as for CSV
                if cells.iter().all(|(existing, _)| *existing != column) {
                    seen_columns.insert(column);
                    cells.push((column, cell_text(cell)));
                }
            }
        }
        converted.push(cells);
    }

    for column in Column::REQUIRED {
        if !seen_columns.contains(&column) {
            return Err(DatasetError::MissingColumn {
                column: column.canonical_name(),
                path: path.display().to_string(),
            }
            .into());
        }
    }

    let mut table = RawTable::default();
    for cells in &converted {
        table.push_row(|column| {
            cells
                .iter()
                .find(|(candidate, _)| *candidate == column)
                .map(|(_, text)| text.as_str())
                .unwrap_or("")
        });
    }

    Ok(table)
}

fn cell_text(cell: Value) -> String {
    match cell {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn csv_reader(content: &str) -> csv::Reader<&[u8]> {
        csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(content.as_bytes())
    }

    #[test]
    fn test_read_csv_basic() {
        let content = "CPU,GPU,RAM,Game Settings,FPS Estimate\n\
                       i5 12th gen,rtx 3060 ti,16gb,Low shadows,240\n";
        let table = read_csv(csv_reader(content), Path::new("t.csv")).unwrap();

        assert_eq!(table.rows_read, 1);
        assert_eq!(table.records.len(), 1);
        let record = &table.records[0];
        assert_eq!(record.cpu, "i5 12th gen");
        assert_eq!(record.payload.game_settings, "Low shadows");
        assert_eq!(record.payload.fps_estimate, "240");
        assert_eq!(record.payload.source, "");
    }

    #[test]
    fn test_read_csv_quoted_fields_and_short_rows() {
        let content = "cpu,gpu,ram,launch options,source\n\
                       \"Ryzen 5 5600\",\"RX 6600\",\"16 GB\",\"-novid -high\"\n";
        let table = read_csv(csv_reader(content), Path::new("t.csv")).unwrap();

        let record = &table.records[0];
        assert_eq!(record.payload.launch_options, "-novid -high");
        assert_eq!(record.payload.source, "");
    }

    #[test]
    fn test_read_csv_skips_blank_descriptor_rows() {
        let content = "cpu,gpu,ram,settings\n,,,orphan\ni5,rtx 3060,16gb,x\n";
        let table = read_csv(csv_reader(content), Path::new("t.csv")).unwrap();

        assert_eq!(table.rows_read, 2);
        assert_eq!(table.skipped_blank, 1);
        assert_eq!(table.records.len(), 1);
    }

    #[test]
    fn test_read_csv_missing_column() {
        let content = "cpu,ram\ni5,16gb\n";
        let err = read_csv(csv_reader(content), Path::new("t.csv")).unwrap_err();
        assert!(err.to_string().contains("gpu"));
    }

    #[test]
    fn test_read_json_rows() {
        let content = r#"[
            {"CPU": "i5 12th gen", "GPU": "rtx 3060 ti", "RAM": "16gb", "FPS": 240},
            {"cpu": "ryzen 5 5000", "gpu": "rx 580", "ram": "8gb", "source": null}
        ]"#;
        let table = read_json(content, Path::new("t.json")).unwrap();

        assert_eq!(table.records.len(), 2);
        assert_eq!(table.records[0].payload.fps_estimate, "240");
        assert_eq!(table.records[1].payload.source, "");
    }

    #[test]
    fn test_read_json_rejects_non_array() {
        let err = read_json(r#"{"cpu": "i5"}"#, Path::new("t.json")).unwrap_err();
        assert!(err.to_string().contains("expected an array"));
        assert!(err.to_string().contains("an object"));
    }

    #[test]
    fn test_read_json_rejects_non_object_row() {
        let err = read_json(r#"[["i5", "rtx 3060", "16gb"]]"#, Path::new("t.json")).unwrap_err();
        assert!(err.to_string().contains("row 1"));
    }

    #[test]
    fn test_read_json_missing_column() {
        let err = read_json(r#"[{"cpu": "i5", "gpu": "rx 580"}]"#, Path::new("t.json")).unwrap_err();
        assert!(err.to_string().contains("ram"));
    }
}
