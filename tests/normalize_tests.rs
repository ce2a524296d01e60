// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use proptest::prelude::*;
use rigpreset::normalize::{normalize, normalize_cpu, normalize_gpu, normalize_ram, HardwareKind};

// ==================== Collisions ====================

#[test]
fn test_intel_same_family_and_generation_collide() {
    let keys = [
        normalize_cpu("Intel Core i5-12400F"),
        normalize_cpu("i5 12600K"),
        normalize_cpu("Core i5 12th Gen"),
    ];
    assert!(keys.iter().all(|key| key == "i5 12th gen"));
}

#[test]
fn test_intel_different_generation_does_not_collide() {
    assert_ne!(normalize_cpu("i5-12400F"), normalize_cpu("i5-13400F"));
    assert_ne!(normalize_cpu("i5-12400F"), normalize_cpu("i7-12700K"));
}

#[test]
fn test_ryzen_suffix_variants_collide() {
    assert_eq!(normalize_cpu("Ryzen 5 5600"), normalize_cpu("AMD Ryzen 5 5600X"));
}

#[test]
fn test_gpu_memory_suffix_ignored() {
    assert_eq!(normalize_gpu("GeForce RTX 3060 Ti 8GB"), "rtx 3060 ti");
    assert_eq!(normalize_gpu("Radeon RX 580"), "rx 580");
}

#[test]
fn test_ram_units_collide() {
    assert_eq!(normalize_ram("16GB"), "16gb");
    assert_eq!(normalize_ram("16 ГБ"), "16gb");
    assert_eq!(normalize_ram("16gb"), normalize_ram("16 GiB"));
}

#[test]
fn test_dispatch_by_kind() {
    for kind in HardwareKind::ALL {
        assert_eq!(normalize(kind, ""), "");
    }
    assert_eq!(normalize(HardwareKind::Gpu, "rx580"), "rx 580");
}

// ==================== Properties ====================

fn descriptor() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9 ()™®-]{0,40}",
        "(Intel Core |AMD )?(i[3579]|Ryzen [3579])[ -]?[0-9]{0,5}[a-zA-Z]{0,3}( [0-9]{1,2}(st|nd|rd|th) Gen)?",
        "(NVIDIA |AMD )?(GeForce |Radeon )?(RTX|GTX|RX) ?[0-9]{2,5} ?(Ti|SUPER|XT|XTX)?( [0-9]{1,2}GB)?",
        "[0-9]{0,3} ?(GB|gb|ГБ|GiB|Gigabytes)?( DDR[345])?",
    ]
}

proptest! {
    #[test]
    fn prop_normalizers_are_total(raw in "\\PC*") {
        for kind in HardwareKind::ALL {
            let _ = normalize(kind, &raw);
        }
    }

    #[test]
    fn prop_normalizers_are_idempotent(raw in descriptor()) {
        for kind in HardwareKind::ALL {
            let once = normalize(kind, &raw);
            prop_assert_eq!(normalize(kind, &once), once);
        }
    }

    #[test]
    fn prop_idempotent_on_arbitrary_text(raw in "\\PC{0,24}") {
        for kind in HardwareKind::ALL {
            let once = normalize(kind, &raw);
            prop_assert_eq!(normalize(kind, &once), once);
        }
    }

    #[test]
    fn prop_keys_are_trimmed_lowercase(raw in descriptor()) {
        for kind in HardwareKind::ALL {
            let key = normalize(kind, &raw);
            prop_assert_eq!(key.trim(), key.as_str());
            prop_assert!(!key.contains("  "));
            prop_assert!(!key.chars().any(|c| c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn prop_ram_with_digits_ends_in_gb(size in 1u32..1024, unit in "(GB|gb| GB|ГБ| GiB)") {
        prop_assert_eq!(normalize_ram(&format!("{size}{unit}")), format!("{size}gb"));
    }
}
