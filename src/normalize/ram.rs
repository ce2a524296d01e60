// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! RAM capacity normalization

use regex::Regex;
use std::sync::OnceLock;

use super::text::{collapse_whitespace, trim_leading_zeros};

fn unit_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"гб|gib|gigabytes?").expect("unit pattern is valid"))
}

fn integer_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[0-9]+").expect("integer pattern is valid"))
}

/// Normalize a RAM descriptor into `"<N>gb"`.
///
/// Only the first integer is read, so a kit written as "2x8GB" keys as
/// `"2gb"`; datasets are expected to state total capacity.
pub fn normalize_ram(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let cleaned = collapse_whitespace(&unit_re().replace_all(&lowered, "gb"));

    match integer_re().find(&cleaned) {
        Some(digits) => format!("{}gb", trim_leading_zeros(digits.as_str())),
        None => cleaned,
    }
}
