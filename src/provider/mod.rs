//! Remote memory provider capability
//!
//! Everything the scanner needs from the outside world goes through the
//! [`MemoryProvider`] trait: process enumeration, module resolution, and
//! bulk reads against an already-attached target. The concrete adapter is
//! [`VmmProvider`] (MemProcFS over DMA hardware); [`MockProvider`] backs
//! tests and benches.

mod mock;
mod vmm;

pub use mock::MockProvider;
pub use vmm::VmmProvider;

use thiserror::Error;

/// Provider-level errors
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Session could not be established with the backing library/hardware
    #[error("Provider session failed: {0}")]
    InitFailed(String),

    /// Read at an address failed outright
    #[error("Memory read failed at 0x{address:X} (size: {size}): {reason}")]
    ReadFailed {
        address: u64,
        size: usize,
        reason: String,
    },

    /// Read returned fewer bytes than requested
    #[error("Short read at 0x{address:X}: expected {expected} bytes, got {actual}")]
    ShortRead {
        address: u64,
        expected: usize,
        actual: usize,
    },

    /// The process is gone or cannot be opened
    #[error("Process {0} not available")]
    ProcessUnavailable(u32),

    /// Module not present in the process
    #[error("Module not found: {0}")]
    ModuleNotFound(String),

    /// Anything else the backing library reports
    #[error("Provider error: {0}")]
    Other(String),
}

/// Read access to another process's memory, plus the minimal process and
/// module metadata needed to aim the scan.
///
/// Reads are request/response with no exception semantics: a failed or
/// short read is an `Err`, and callers inside the scan loop treat it as
/// "no signal here", never as a reason to abort.
pub trait MemoryProvider {
    /// Enumerate process identifiers visible to the session
    fn list_pids(&self) -> Result<Vec<u32>, ProviderError>;

    /// Resolve the executable name for a PID
    fn process_name(&self, pid: u32) -> Result<String, ProviderError>;

    /// Resolve a named module's base address within a process
    fn module_base(&self, pid: u32, module_name: &str) -> Result<u64, ProviderError>;

    /// Bulk read into a caller-owned buffer
    ///
    /// Returns the number of bytes actually read, which may be short when
    /// the tail of the range is unmapped.
    fn read_into(&self, pid: u32, address: u64, buf: &mut [u8]) -> Result<usize, ProviderError>;

    /// Read exactly `size` bytes into a fresh buffer
    fn read_bytes(&self, pid: u32, address: u64, size: usize) -> Result<Vec<u8>, ProviderError> {
        let mut buf = vec![0u8; size];
        let read = self.read_into(pid, address, &mut buf)?;
        if read != size {
            return Err(ProviderError::ShortRead {
                address,
                expected: size,
                actual: read,
            });
        }
        Ok(buf)
    }

    /// Read a little-endian u64; the full 8 bytes must be readable
    fn read_u64(&self, pid: u32, address: u64) -> Result<u64, ProviderError> {
        let mut buf = [0u8; 8];
        let read = self.read_into(pid, address, &mut buf)?;
        if read != buf.len() {
            return Err(ProviderError::ShortRead {
                address,
                expected: buf.len(),
                actual: read,
            });
        }
        Ok(u64::from_le_bytes(buf))
    }

    /// Read a little-endian u32; the full 4 bytes must be readable
    fn read_u32(&self, pid: u32, address: u64) -> Result<u32, ProviderError> {
        let mut buf = [0u8; 4];
        let read = self.read_into(pid, address, &mut buf)?;
        if read != buf.len() {
            return Err(ProviderError::ShortRead {
                address,
                expected: buf.len(),
                actual: read,
            });
        }
        Ok(u32::from_le_bytes(buf))
    }
}
