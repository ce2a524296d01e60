// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CPU descriptor normalization
//!
//! Intel parts collapse to `"<family> <generation>th gen"`, Ryzen parts to
//! `"ryzen <tier> <series>"`. Anything else falls through as the cleaned,
//! lowercased text.

use regex::Regex;
use std::sync::OnceLock;

use super::text::{
    collapse_whitespace, remove_parentheticals, remove_words, strip_trademarks, whole_words,
};

/// Ryzen model leading digit to series label
const RYZEN_SERIES: &[(char, &str)] = &[
    ('1', "1000"),
    ('2', "2000"),
    ('3', "3000"),
    ('4', "4000"),
    ('5', "5000"),
    ('7', "7000"),
];

fn decoration_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| whole_words(&["processor", "core", "intel", "amd"]))
}

fn intel_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\b(i[3579])(?:[\s-]*([0-9]{3,5}))?").expect("intel pattern is valid")
    })
}

fn generation_token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\b([0-9]{1,2})\s*(?:st|nd|rd|th)[\s-]*gen(?:eration)?\b")
            .expect("generation pattern is valid")
    })
}

fn ryzen_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\bryzen\s*([3579])\b(?:[\s-]*([0-9]{3,4}))?").expect("ryzen pattern is valid")
    })
}

/// Lowercase and strip vendor decoration, leaving the text the family
/// patterns run against.
fn clean(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let without_marks = strip_trademarks(&lowered);
    let without_parens = remove_parentheticals(&without_marks);
    let without_vendor = remove_words(&without_parens, decoration_re());
    collapse_whitespace(&without_vendor)
}

/// Normalize a CPU descriptor into its canonical lookup key.
///
/// Never fails; unrecognized input comes back cleaned rather than rejected.
pub fn normalize_cpu(raw: &str) -> String {
    let cleaned = clean(raw);

    if let Some(key) = intel_key(&cleaned) {
        return key;
    }
    if let Some(key) = ryzen_key(&cleaned) {
        return key;
    }

    cleaned
}

fn intel_key(cleaned: &str) -> Option<String> {
    let caps = intel_re().captures(cleaned)?;
    let family = caps.get(1)?.as_str();

    // An explicit "12th gen" beats whatever the model number implies
    let generation = explicit_generation(cleaned).or_else(|| {
        caps.get(2)
            .and_then(|model| generation_from_model(model.as_str()))
    });

    Some(match generation {
        Some(generation) => format!("{family} {generation}th gen"),
        None => family.to_string(),
    })
}

fn explicit_generation(cleaned: &str) -> Option<u32> {
    generation_token_re()
        .captures(cleaned)
        .and_then(|caps| caps.get(1))
        .and_then(|digits| digits.as_str().parse::<u32>().ok())
        .filter(|generation| *generation > 0)
}

/// Five-digit models carry the generation in the first two digits
/// (12400 -> 12); four- and three-digit models in the first one.
fn generation_from_model(model: &str) -> Option<u32> {
    let prefix = match model.len() {
        5 => &model[..2],
        3 | 4 => &model[..1],
        _ => return None,
    };
    prefix.parse::<u32>().ok().filter(|generation| *generation > 0)
}

fn ryzen_key(cleaned: &str) -> Option<String> {
    let caps = ryzen_re().captures(cleaned)?;
    let tier = caps.get(1)?.as_str();

    let series = caps
        .get(2)
        .and_then(|model| model.as_str().chars().next())
        .map(series_label);

    Some(match series {
        Some(series) => format!("ryzen {tier} {series}"),
        None => format!("ryzen {tier}"),
    })
}

fn series_label(leading: char) -> String {
    RYZEN_SERIES
        .iter()
        .find(|(digit, _)| *digit == leading)
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| format!("{leading}000"))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Intel ====================

    #[test]
    fn test_intel_same_generation_collides() {
        let expected = "i5 12th gen";
        assert_eq!(normalize_cpu("Intel Core i5-12400F"), expected);
        assert_eq!(normalize_cpu("i5 12600K"), expected);
        assert_eq!(normalize_cpu("Core i5 12th Gen"), expected);
        assert_eq!(normalize_cpu("12th Gen Intel(R) Core(TM) i5-12400"), expected);
    }

    #[test]
    fn test_intel_four_digit_model_uses_first_digit() {
        assert_eq!(normalize_cpu("Intel Core i7-9700K"), "i7 9th gen");
        assert_eq!(normalize_cpu("i5-4690"), "i5 4th gen");
    }

    #[test]
    fn test_intel_three_digit_model_uses_first_digit() {
        assert_eq!(normalize_cpu("Intel Core i7 920"), "i7 9th gen");
    }

    #[test]
    fn test_intel_explicit_generation_wins_over_model() {
        assert_eq!(normalize_cpu("i5-12400 (13th gen refresh)"), "i5 12th gen");
        assert_eq!(normalize_cpu("i5-12400 13th gen"), "i5 13th gen");
    }

    #[test]
    fn test_intel_ordinal_suffixes() {
        assert_eq!(normalize_cpu("Core i7 2nd Gen"), "i7 2th gen");
        assert_eq!(normalize_cpu("Core i3 3rd generation"), "i3 3th gen");
        assert_eq!(normalize_cpu("i9 1st gen"), "i9 1th gen");
    }

    #[test]
    fn test_intel_without_generation_is_bare_family() {
        assert_eq!(normalize_cpu("Intel Core i9"), "i9");
        assert_eq!(normalize_cpu("i3-99"), "i3");
    }

    #[test]
    fn test_intel_processor_word_and_trademarks_stripped() {
        assert_eq!(
            normalize_cpu("Intel® Core™ i7-13700K Processor"),
            "i7 13th gen"
        );
    }

    // ==================== Ryzen ====================

    #[test]
    fn test_ryzen_same_series_collides() {
        assert_eq!(normalize_cpu("Ryzen 5 5600"), normalize_cpu("AMD Ryzen 5 5600X"));
        assert_eq!(normalize_cpu("Ryzen 5 5600"), "ryzen 5 5000");
    }

    #[test]
    fn test_ryzen_series_table() {
        assert_eq!(normalize_cpu("Ryzen 7 1700"), "ryzen 7 1000");
        assert_eq!(normalize_cpu("Ryzen 5 2600"), "ryzen 5 2000");
        assert_eq!(normalize_cpu("Ryzen 9 3900X"), "ryzen 9 3000");
        assert_eq!(normalize_cpu("Ryzen 3 4100"), "ryzen 3 4000");
        assert_eq!(normalize_cpu("Ryzen 7 7800X3D"), "ryzen 7 7000");
    }

    #[test]
    fn test_ryzen_unmapped_leading_digit_passes_through() {
        assert_eq!(normalize_cpu("Ryzen 5 8600G"), "ryzen 5 8000");
        assert_eq!(normalize_cpu("Ryzen 9 9950X"), "ryzen 9 9000");
    }

    #[test]
    fn test_ryzen_hyphenated_model() {
        assert_eq!(normalize_cpu("AMD Ryzen 7-5800X3D"), "ryzen 7 5000");
    }

    #[test]
    fn test_ryzen_without_model() {
        assert_eq!(normalize_cpu("AMD Ryzen 5"), "ryzen 5");
    }

    #[test]
    fn test_ryzen_requires_tier_digit() {
        // "5600" is a model, not a tier followed by a model
        assert_eq!(normalize_cpu("Ryzen 5600"), "ryzen 5600");
    }

    // ==================== Fallback ====================

    #[test]
    fn test_unrecognized_falls_back_to_cleaned_text() {
        assert_eq!(normalize_cpu("  Apple   M2 Pro "), "apple m2 pro");
        assert_eq!(normalize_cpu("AMD Athlon 3000G"), "athlon 3000g");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize_cpu(""), "");
        assert_eq!(normalize_cpu("   "), "");
        assert_eq!(normalize_cpu("(boxed)"), "");
    }

    #[test]
    fn test_canonical_keys_are_fixed_points() {
        for key in ["i5 12th gen", "i7", "ryzen 5 5000", "ryzen 9", "apple m2"] {
            assert_eq!(normalize_cpu(key), key);
        }
    }
}
