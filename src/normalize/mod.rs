// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Hardware descriptor normalization
//!
//! Turns free-form CPU, GPU and RAM descriptors into canonical keys. The same
//! functions build dataset keys at load time and query keys at lookup time,
//! so equality between the two sides is the whole matching contract.
//!
//! Every normalizer is total and idempotent: any input yields a key, and a
//! key fed back in comes out unchanged.

pub mod cpu;
pub mod gpu;
pub mod ram;
pub mod text;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use cpu::normalize_cpu;
pub use gpu::normalize_gpu;
pub use ram::normalize_ram;

/// Which kind of descriptor a string describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum HardwareKind {
    Cpu,
    Gpu,
    Ram,
}

impl HardwareKind {
    pub const ALL: [HardwareKind; 3] = [HardwareKind::Cpu, HardwareKind::Gpu, HardwareKind::Ram];

    /// Normalize `raw` as this kind of descriptor.
    pub fn normalize(self, raw: &str) -> String {
        normalize(self, raw)
    }
}

impl fmt::Display for HardwareKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HardwareKind::Cpu => write!(f, "CPU"),
            HardwareKind::Gpu => write!(f, "GPU"),
            HardwareKind::Ram => write!(f, "RAM"),
        }
    }
}

/// Dispatch to the normalizer for `kind`.
pub fn normalize(kind: HardwareKind, raw: &str) -> String {
    match kind {
        HardwareKind::Cpu => normalize_cpu(raw),
        HardwareKind::Gpu => normalize_gpu(raw),
        HardwareKind::Ram => normalize_ram(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_matches_direct_calls() {
        assert_eq!(normalize(HardwareKind::Cpu, "i5-12400F"), normalize_cpu("i5-12400F"));
        assert_eq!(normalize(HardwareKind::Gpu, "RX 580"), normalize_gpu("RX 580"));
        assert_eq!(normalize(HardwareKind::Ram, "16 GB"), normalize_ram("16 GB"));
    }

    #[test]
    fn test_kind_method() {
        assert_eq!(HardwareKind::Ram.normalize("8 ГБ"), "8gb");
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(HardwareKind::Cpu.to_string(), "CPU");
        assert_eq!(HardwareKind::Gpu.to_string(), "GPU");
        assert_eq!(HardwareKind::Ram.to_string(), "RAM");
    }

    #[test]
    fn test_kind_serde_lowercase() {
        let json = serde_json::to_string(&HardwareKind::Gpu).unwrap();
        assert_eq!(json, "\"gpu\"");
        let kind: HardwareKind = serde_json::from_str("\"ram\"").unwrap();
        assert_eq!(kind, HardwareKind::Ram);
    }

    #[test]
    fn test_every_kind_handles_empty_input() {
        for kind in HardwareKind::ALL {
            assert_eq!(kind.normalize(""), "");
        }
    }
}
