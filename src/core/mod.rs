//! Core module containing the fundamental types for gworld-scan
//!
//! This module provides the building blocks used throughout the scanner:
//! remote address handling, candidate records, and error types.

pub mod types;

// Re-export commonly used types for convenience
pub use types::{Address, Candidate, ScanError, ScanResult};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
