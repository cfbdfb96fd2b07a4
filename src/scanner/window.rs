//! Scan window derivation
//!
//! The window is derived from a known-good anchor inside the module (a
//! previously-dumped stable offset) and a radius; both bounds are snapped
//! down to page boundaries so chunk reads line up with the page map.

use crate::core::types::{Address, PAGE_SIZE};

/// A half-open, page-aligned address range `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanWindow {
    pub start: Address,
    pub end: Address,
}

impl ScanWindow {
    /// Build the window `[anchor - radius, anchor + radius)`, both bounds
    /// aligned down to the page.
    pub fn around(anchor: Address, radius: u64) -> Self {
        ScanWindow {
            start: anchor.saturating_sub(radius).align_down(PAGE_SIZE),
            end: (anchor + radius).align_down(PAGE_SIZE),
        }
    }

    /// Total number of bytes covered
    pub fn size(&self) -> u64 {
        self.end.as_u64().saturating_sub(self.start.as_u64())
    }

    /// Partition the window into `(base, length)` chunks of at most
    /// `chunk_size` bytes.
    pub fn chunks(&self, chunk_size: usize) -> impl Iterator<Item = (u64, usize)> + '_ {
        let start = self.start.as_u64();
        let end = self.end.as_u64();
        (start..end).step_by(chunk_size).map(move |base| {
            let len = (end - base).min(chunk_size as u64) as usize;
            (base, len)
        })
    }
}
