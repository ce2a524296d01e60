// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Rendering matched presets
//!
//! Two renderings of a record: a terminal summary and the plain-text profile
//! file users save next to their game config.

use std::collections::HashSet;
use std::fmt::Write as _;

use crate::dataset::HardwareRecord;

/// File name used when `--save` is given without a path
pub const DEFAULT_PROFILE_FILE: &str = "cs2_profile.txt";

/// Shown in place of an empty value
pub const PLACEHOLDER: &str = "—";

const QUOTES: [char; 3] = ['"', '\'', '`'];

/// Tidy a launch-options string.
///
/// Wrapping quotes are removed and whitespace collapsed. A repeated option
/// (`-novid`, `+fps_max`, compared case-insensitively) is dropped along with
/// its values; the first occurrence is kept.
pub fn clean_launch_options(raw: &str) -> String {
    let mut text = raw.trim();
    while let Some(inner) = strip_wrapping_quote(text) {
        text = inner.trim();
    }

    let mut seen = HashSet::new();
    let mut kept: Vec<&str> = Vec::new();
    let mut dropping = false;

    for token in text.split_whitespace() {
        if is_option(token) {
            dropping = !seen.insert(token.to_lowercase());
        }
        if !dropping {
            kept.push(token);
        }
    }

    kept.join(" ")
}

fn strip_wrapping_quote(text: &str) -> Option<&str> {
    let first = text.chars().next()?;
    if !QUOTES.contains(&first) || text.len() < 2 || !text.ends_with(first) {
        return None;
    }
    Some(&text[first.len_utf8()..text.len() - first.len_utf8()])
}

/// `-x` and `+x` are options; `-1` is a value.
fn is_option(token: &str) -> bool {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some('-' | '+'), Some(next)) => !next.is_ascii_digit() && next != '.',
        _ => false,
    }
}

fn or_placeholder(value: &str) -> &str {
    if value.trim().is_empty() {
        PLACEHOLDER
    } else {
        value
    }
}

/// Plain-text profile for saving to disk.
pub fn render_profile(record: &HardwareRecord) -> String {
    let payload = &record.payload;
    let mut out = String::new();

    let _ = writeln!(out, "CPU: {}", record.cpu);
    let _ = writeln!(out, "GPU: {}", record.gpu);
    let _ = writeln!(out, "RAM: {}", record.ram);
    out.push('\n');

    let sections = [
        ("Game Settings", payload.game_settings.clone()),
        ("Launch Options", clean_launch_options(&payload.launch_options)),
        ("Control Panel", payload.control_panel.clone()),
        ("Windows Optimization", payload.windows_optimization.clone()),
    ];
    for (title, body) in &sections {
        let _ = writeln!(out, "[{}]\n{}\n", title, body);
    }

    let _ = writeln!(out, "FPS Estimate: {}", or_placeholder(&payload.fps_estimate));
    let _ = writeln!(out, "Source: {}", payload.source);
    out
}

/// Terminal rendering of a record.
pub fn render_summary(record: &HardwareRecord) -> String {
    let payload = &record.payload;
    let launch = clean_launch_options(&payload.launch_options);
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} / {} / {}",
        or_placeholder(&record.cpu),
        or_placeholder(&record.gpu),
        or_placeholder(&record.ram)
    );
    out.push('\n');

    let _ = writeln!(out, "Game settings:\n  {}", or_placeholder(&payload.game_settings));
    let _ = writeln!(out, "Launch options:\n  {}", or_placeholder(&launch));
    let _ = writeln!(out, "Driver panel:\n  {}", or_placeholder(&payload.control_panel));
    let _ = writeln!(
        out,
        "Windows optimization:\n  {}",
        or_placeholder(&payload.windows_optimization)
    );
    out.push('\n');
    let _ = writeln!(out, "Expected FPS: {}", or_placeholder(&payload.fps_estimate));
    let _ = write!(out, "Source: {}", or_placeholder(&payload.source));
    out
}
