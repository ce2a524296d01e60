// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! GPU descriptor normalization

use regex::Regex;
use std::sync::OnceLock;

use super::text::{collapse_whitespace, remove_words, strip_trademarks, trim_leading_zeros, whole_words};

/// Variant suffixes, highest priority first
const VARIANTS: [&str; 3] = ["super", "ti", "xt"];

fn vendor_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| whole_words(&["nvidia", "geforce", "amd", "radeon"]))
}

/// Token pattern that also accepts the token glued to digits ("3060ti", "rx580").
fn glued_token(token: &str) -> Regex {
    Regex::new(&format!(r"(?:^|[^a-z])({token})(?:[^a-z]|$)")).expect("token pattern is valid")
}

fn variant_res() -> &'static [(&'static str, Regex)] {
    static RES: OnceLock<Vec<(&'static str, Regex)>> = OnceLock::new();
    RES.get_or_init(|| {
        VARIANTS
            .iter()
            .map(|variant| (*variant, glued_token(variant)))
            .collect()
    })
}

fn family_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| glued_token("rtx|gtx|rx"))
}

fn digit_run_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[0-9]+").expect("digit pattern is valid"))
}

fn clean(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let without_marks = strip_trademarks(&lowered);
    collapse_whitespace(&remove_words(&without_marks, vendor_re()))
}

/// Normalize a GPU descriptor into its canonical lookup key.
///
/// `"GeForce RTX 3060 Ti 8GB"` becomes `"rtx 3060 ti"`; input without both a
/// family and a model number comes back cleaned.
pub fn normalize_gpu(raw: &str) -> String {
    let cleaned = clean(raw);

    let family = family_re()
        .captures(&cleaned)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str());
    let model = model_number(&cleaned);

    match (family, model) {
        (Some(family), Some(model)) => match variant(&cleaned) {
            Some(variant) => format!("{family} {model} {variant}"),
            None => format!("{family} {model}"),
        },
        _ => cleaned,
    }
}

fn variant(cleaned: &str) -> Option<&'static str> {
    variant_res()
        .iter()
        .find(|(_, re)| re.is_match(cleaned))
        .map(|(variant, _)| *variant)
}

/// First digit run of length 3-4; longer or shorter runs (memory sizes,
/// part numbers) are skipped.
fn model_number(cleaned: &str) -> Option<&str> {
    digit_run_re()
        .find_iter(cleaned)
        .map(|m| m.as_str())
        .find(|run| (3..=4).contains(&run.len()))
        .map(trim_leading_zeros)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geforce_ti_with_memory() {
        assert_eq!(normalize_gpu("GeForce RTX 3060 Ti 8GB"), "rtx 3060 ti");
    }

    #[test]
    fn test_radeon_rx() {
        assert_eq!(normalize_gpu("Radeon RX 580"), "rx 580");
        assert_eq!(normalize_gpu("AMD Radeon RX 6700 XT 12GB"), "rx 6700 xt");
    }

    #[test]
    fn test_variant_glued_to_model() {
        assert_eq!(normalize_gpu("NVIDIA GTX 1080Ti"), "gtx 1080 ti");
        assert_eq!(normalize_gpu("rx580"), "rx 580");
    }

    #[test]
    fn test_super_beats_ti() {
        assert_eq!(normalize_gpu("RTX 4070 Ti Super"), "rtx 4070 super");
        assert_eq!(normalize_gpu("GeForce GTX 1660 SUPER"), "gtx 1660 super");
    }

    #[test]
    fn test_variant_needs_token_boundary() {
        // "xtx" is not an "xt" variant and "titan" is not "ti"
        assert_eq!(normalize_gpu("Radeon RX 7900 XTX"), "rx 7900");
        assert_eq!(normalize_gpu("GTX 1080 Titanium edition"), "gtx 1080");
    }

    #[test]
    fn test_model_leading_zeros_dropped() {
        assert_eq!(normalize_gpu("RX 0580"), "rx 580");
    }

    #[test]
    fn test_memory_size_is_not_a_model() {
        assert_eq!(normalize_gpu("16GB RTX 4060 Ti"), "rtx 4060 ti");
    }

    #[test]
    fn test_missing_family_falls_back() {
        assert_eq!(normalize_gpu("Intel Arc A770"), "intel arc a770");
        assert_eq!(normalize_gpu("NVIDIA Quadro P2000"), "quadro p2000");
    }

    #[test]
    fn test_missing_model_falls_back() {
        assert_eq!(normalize_gpu("GeForce RTX"), "rtx");
        assert_eq!(normalize_gpu("RTX 12345"), "rtx 12345");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize_gpu(""), "");
        assert_eq!(normalize_gpu("NVIDIA GeForce"), "");
    }

    #[test]
    fn test_canonical_keys_are_fixed_points() {
        for key in ["rtx 3060 ti", "rx 580", "gtx 1660 super", "rx 6700 xt", "intel arc a770"] {
            assert_eq!(normalize_gpu(key), key);
        }
    }
}
