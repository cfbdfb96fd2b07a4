//! Pointer plausibility checks
//!
//! Two forms: a pure range predicate used to reject the bulk of scanned
//! slots for free, and a probing variant that additionally requires a full
//! word-sized read to succeed at the address. The probing form costs one
//! provider round trip per call.

use crate::process::TargetProcess;

/// Values below this are null, flags, or counters, never heap pointers
pub const POINTER_GUARD_MIN: u64 = 0x10000;

/// Canonical maximum user-space address on x64 Windows (48-bit VA space)
pub const USER_SPACE_MAX: u64 = 0x7FFF_FFFF_FFFF;

/// Pure range check: is this value address-space-shaped?
///
/// No side effects and no dereference; O(1).
#[inline]
pub fn is_plausible_pointer(value: u64) -> bool {
    (POINTER_GUARD_MIN..=USER_SPACE_MAX).contains(&value)
}

/// Plausible and actually dereferenceable.
///
/// Issues one remote 8-byte probe read; the value is valid only if the
/// probe returns the full word.
pub fn is_valid_pointer(target: &TargetProcess<'_>, value: u64) -> bool {
    is_plausible_pointer(value) && target.read_u64(value).is_ok()
}
