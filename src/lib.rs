//! DMA-backed GWorld offset scanner for Unreal Engine 5 titles
//!
//! Scans a bounded window of a running game's memory for values shaped
//! like the engine's world-root pointer, grades each candidate against the
//! known UWorld layout, and reports the best offset from the module base.

pub mod config;
pub mod core;
pub mod process;
pub mod provider;
pub mod report;
pub mod scanner;

// Re-export main types for convenience
pub use crate::core::types::{Address, Candidate, ScanError, ScanResult};
pub use crate::process::{find_target, resolve_module, TargetProcess};
pub use crate::provider::{MemoryProvider, MockProvider, ProviderError, VmmProvider};
pub use crate::report::{rank, render_report, RankedCandidates};
pub use crate::scanner::{RegionScanner, ScanOptions, ScanWindow, StructureValidator, WorldOffsets};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_constants() {
        assert_eq!(crate::core::VERSION, env!("CARGO_PKG_VERSION"));
        assert_eq!(crate::core::AUTHORS, env!("CARGO_PKG_AUTHORS"));
    }

    #[test]
    fn test_address_reexport() {
        let addr = Address::new(0x1000);
        assert_eq!(addr.as_u64(), 0x1000);
        assert!(Address::null().is_null());
    }

    #[test]
    fn test_candidate_reexport() {
        let base = Address::new(0x1000);
        let candidate = Candidate::new(base + 0x500, base, 0x20_0000, 85);
        assert_eq!(candidate.offset, 0x500);
    }

    #[test]
    fn test_scan_error_reexport() {
        let err = ScanError::ProcessNotFound("game.exe".to_string());
        assert!(err.to_string().contains("Process not found"));
    }
}
