//! Chunked region scanning
//!
//! Walks the window in bulk-read chunks, decodes every 8-byte-aligned slot,
//! and runs the cheap plausibility filter before the expensive structural
//! validator. Validator round trips dominate scan latency, so that ordering
//! is the primary performance lever.

use crate::core::types::Candidate;
use crate::process::TargetProcess;
use crate::scanner::filter::is_plausible_pointer;
use crate::scanner::validator::{StructureValidator, WorldOffsets};
use crate::scanner::window::ScanWindow;
use tracing::{debug, info};

const POINTER_STRIDE: usize = 8;

/// Tunables for the region scan
#[derive(Debug, Clone, Copy)]
pub struct ScanOptions {
    /// Bytes per bulk read; megabyte-scale amortizes per-read overhead
    pub chunk_size: usize,
    /// Minimum validator score for a slot to become a candidate
    pub min_confidence: u32,
}

impl Default for ScanOptions {
    fn default() -> Self {
        ScanOptions {
            chunk_size: 2 * 1024 * 1024,
            min_confidence: 50,
        }
    }
}

/// Single-pass scanner over a [`ScanWindow`].
///
/// Exclusively owns the chunk buffer, which is reused across every bulk
/// read of the scan.
pub struct RegionScanner<'a> {
    target: &'a TargetProcess<'a>,
    validator: StructureValidator<'a>,
    options: ScanOptions,
    buffer: Vec<u8>,
}

impl<'a> RegionScanner<'a> {
    pub fn new(target: &'a TargetProcess<'a>, offsets: WorldOffsets, options: ScanOptions) -> Self {
        RegionScanner {
            target,
            validator: StructureValidator::new(target, offsets),
            options,
            buffer: vec![0u8; options.chunk_size],
        }
    }

    /// Scan the window, streaming each qualifying candidate to `emit` in
    /// discovery order.
    ///
    /// A chunk whose bulk read fails is skipped without retry: an unmapped
    /// or inaccessible page is expected, not an error. Short reads are
    /// walked only up to the bytes actually returned.
    pub fn scan_each<F>(&mut self, window: &ScanWindow, mut emit: F)
    where
        F: FnMut(Candidate),
    {
        let total = window.size();
        let module_base = self.target.module_base();
        let mut last_progress = u64::MAX;

        for (chunk_base, want) in window.chunks(self.options.chunk_size) {
            if total > 0 {
                let progress = (chunk_base - window.start.as_u64()) * 100 / total;
                if progress != last_progress && progress % 5 == 0 {
                    info!("Scan progress: {}%", progress);
                    last_progress = progress;
                }
            }

            let read = match self.target.read_into(chunk_base, &mut self.buffer[..want]) {
                Ok(read) => read,
                Err(_) => continue,
            };

            for (slot, bytes) in self.buffer[..read].chunks_exact(POINTER_STRIDE).enumerate() {
                let mut word = [0u8; POINTER_STRIDE];
                word.copy_from_slice(bytes);
                let value = u64::from_le_bytes(word);

                if !is_plausible_pointer(value) {
                    continue;
                }

                let score = self.validator.score(value);
                if score < self.options.min_confidence {
                    continue;
                }

                let slot_address = chunk_base + (slot * POINTER_STRIDE) as u64;
                debug!(
                    "Candidate at 0x{:X} (value: 0x{:X}, score: {})",
                    slot_address, value, score
                );

                emit(
                    Candidate::new(slot_address.into(), module_base, value, score)
                        .with_actor_count(self.validator.actor_count(value)),
                );
            }
        }

        info!("Scan progress: 100%");
    }

    /// Scan the window and collect qualifying candidates in discovery order
    pub fn scan(&mut self, window: &ScanWindow) -> Vec<Candidate> {
        let mut candidates = Vec::new();
        self.scan_each(window, |candidate| candidates.push(candidate));
        candidates
    }
}
