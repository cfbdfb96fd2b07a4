//! Candidate records produced by the region scan

use super::address::Address;
use serde::{Deserialize, Serialize};

/// A pointer-shaped value that cleared the minimum confidence bar.
///
/// Immutable once created; the offset from the module base is the stable,
/// actionable artifact and survives process restarts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Absolute address in the target process where the value was found
    pub address: Address,
    /// `address - module_base`; the deliverable
    pub offset: u64,
    /// The 64-bit value read at `address` (the putative world pointer)
    pub value: u64,
    /// Confidence score accumulated by the structural validator
    pub score: u32,
    /// Actor count re-read from the candidate's persistent level; reported,
    /// never scored
    pub actor_count: u32,
}

impl Candidate {
    pub fn new(address: Address, module_base: Address, value: u64, score: u32) -> Self {
        Candidate {
            address,
            // Wrapping: a window can reach below the module base, and the
            // two's-complement offset is still the value downstream wants
            offset: address.as_u64().wrapping_sub(module_base.as_u64()),
            value,
            score,
            actor_count: 0,
        }
    }

    pub fn with_actor_count(mut self, actor_count: u32) -> Self {
        self.actor_count = actor_count;
        self
    }
}
