//! Candidate discovery engine
//!
//! Layered as: a cheap pointer plausibility filter, a structural validator
//! that grades candidates against the known UWorld layout, and a region
//! scanner that walks the window chunk by chunk and feeds every aligned
//! slot through filter-then-validator.

pub mod filter;
pub mod region;
pub mod validator;
pub mod window;

pub use filter::{is_plausible_pointer, is_valid_pointer};
pub use region::{RegionScanner, ScanOptions};
pub use validator::{StructureValidator, WorldOffsets, MAX_SCORE};
pub use window::ScanWindow;
