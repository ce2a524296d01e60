// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Cleaning steps shared by the descriptor normalizers
//!
//! Every step replaces what it removes with a space, so a removal can never
//! splice two fragments into a new match and a second pass is a no-op.

use regex::Regex;
use std::sync::OnceLock;

/// Collapse whitespace runs to a single space and trim both ends.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Remove trademark decoration (`™`, `®`, `(tm)`, `(r)`).
///
/// Expects lowercased input.
pub fn strip_trademarks(s: &str) -> String {
    s.replace(['™', '®'], " ")
        .replace("(tm)", " ")
        .replace("(r)", " ")
}

/// Remove every `( ... )` group.
pub fn remove_parentheticals(s: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\([^)]*\)").expect("parenthetical pattern is valid"));

    re.replace_all(s, " ").into_owned()
}

/// Build a regex matching any of `words` as a whole word.
pub fn whole_words(words: &[&str]) -> Regex {
    let alternation = words
        .iter()
        .map(|word| regex::escape(word))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"\b(?:{alternation})\b")).expect("word list pattern is valid")
}

/// Remove whole-word matches of `re`.
pub fn remove_words(s: &str, re: &Regex) -> String {
    re.replace_all(s, " ").into_owned()
}

/// Drop leading zeros from an ASCII digit run, keeping a lone `0`.
pub fn trim_leading_zeros(digits: &str) -> &str {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() && !digits.is_empty() {
        "0"
    } else {
        trimmed
    }
}
