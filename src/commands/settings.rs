// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Settings command

use std::path::Path;

use crate::cli::args::{OutputFormat, SettingsCommands};
use crate::config::{Settings, SETTING_KEYS};
use crate::error::Result;

/// Execute a settings subcommand against the file at `path`.
///
/// No subcommand behaves like `show`.
pub fn execute(
    command: Option<SettingsCommands>,
    mut settings: Settings,
    path: &Path,
    format: &OutputFormat,
) -> Result<()> {
    match command {
        None | Some(SettingsCommands::Show) => {
            println!("{}", render_show(&settings, format)?);
        }
        Some(SettingsCommands::Set { key, value }) => {
            settings.set(&key, &value)?;
            settings.save_to(path)?;
            println!("Setting '{}' updated.", key);
        }
        Some(SettingsCommands::Get { key }) => {
            println!("{}", settings.get(&key)?);
        }
        Some(SettingsCommands::Reset) => {
            Settings::default().save_to(path)?;
            println!("Settings reset to defaults.");
        }
    }
    Ok(())
}

pub fn render_show(settings: &Settings, format: &OutputFormat) -> Result<String> {
    if matches!(format, OutputFormat::Json) {
        return Ok(serde_json::to_string_pretty(settings)?);
    }

    let mut lines = Vec::with_capacity(SETTING_KEYS.len());
    for key in SETTING_KEYS {
        lines.push(format!("{} = {}", key, settings.get(key)?));
    }
    Ok(lines.join("\n"))
}
