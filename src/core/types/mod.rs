//! Core type definitions for gworld-scan
//!
//! Contains the remote address wrapper, candidate records produced by the
//! scan, and the error types shared across the pipeline.

mod address;
mod candidate;
mod error;

// Re-export all public types
pub use address::{Address, PAGE_SIZE};
pub use candidate::Candidate;
pub use error::{ScanError, ScanResult};

// Common type aliases
pub type ProcessId = u32;
pub type Score = u32;
