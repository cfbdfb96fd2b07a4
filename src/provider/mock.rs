//! In-memory provider for tests and benches
//!
//! Simulates a target process as a sparse map of memory regions. Fixtures
//! are written up front with the `write_*` helpers; the provider is then
//! used read-only through [`MemoryProvider`].

use super::{MemoryProvider, ProviderError};
use std::collections::HashMap;

/// Mock remote memory provider backed by a sparse region map
#[derive(Debug, Default, Clone)]
pub struct MockProvider {
    regions: HashMap<u64, Vec<u8>>,
    processes: Vec<(u32, String)>,
    modules: HashMap<(u32, String), u64>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a process visible to `list_pids`/`process_name`
    pub fn add_process(&mut self, pid: u32, name: &str) {
        self.processes.push((pid, name.to_string()));
    }

    /// Register a module base for a process
    pub fn add_module(&mut self, pid: u32, module_name: &str, base: u64) {
        self.modules.insert((pid, module_name.to_string()), base);
    }

    /// Map a region of memory at the given address
    pub fn write_memory(&mut self, address: u64, data: &[u8]) {
        self.regions.insert(address, data.to_vec());
    }

    /// Write a little-endian u64 at the given address
    pub fn write_u64(&mut self, address: u64, value: u64) {
        self.write_memory(address, &value.to_le_bytes());
    }

    /// Write a little-endian u32 at the given address
    pub fn write_u32(&mut self, address: u64, value: u32) {
        self.write_memory(address, &value.to_le_bytes());
    }

    /// Locate the region containing `address` and copy what is available
    fn read(&self, address: u64, buf: &mut [u8]) -> Option<usize> {
        // Exact region start with enough data wins
        if let Some(data) = self.regions.get(&address) {
            let n = buf.len().min(data.len());
            buf[..n].copy_from_slice(&data[..n]);
            return Some(n);
        }

        // Otherwise search for a containing region
        for (&base, data) in &self.regions {
            let end = base + data.len() as u64;
            if address >= base && address < end {
                let offset = (address - base) as usize;
                let n = buf.len().min(data.len() - offset);
                buf[..n].copy_from_slice(&data[offset..offset + n]);
                return Some(n);
            }
        }

        None
    }
}

impl MemoryProvider for MockProvider {
    fn list_pids(&self) -> Result<Vec<u32>, ProviderError> {
        Ok(self.processes.iter().map(|(pid, _)| *pid).collect())
    }

    fn process_name(&self, pid: u32) -> Result<String, ProviderError> {
        self.processes
            .iter()
            .find(|(p, _)| *p == pid)
            .map(|(_, name)| name.clone())
            .ok_or(ProviderError::ProcessUnavailable(pid))
    }

    fn module_base(&self, pid: u32, module_name: &str) -> Result<u64, ProviderError> {
        self.modules
            .get(&(pid, module_name.to_string()))
            .copied()
            .ok_or_else(|| ProviderError::ModuleNotFound(module_name.to_string()))
    }

    fn read_into(&self, _pid: u32, address: u64, buf: &mut [u8]) -> Result<usize, ProviderError> {
        self.read(address, buf).ok_or(ProviderError::ReadFailed {
            address,
            size: buf.len(),
            reason: "address not mapped in mock memory".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_back() {
        let mut provider = MockProvider::new();
        provider.write_memory(0x1000, &[0x01, 0x02, 0x03, 0x04, 0x05]);

        let mut buf = [0u8; 5];
        assert_eq!(provider.read_into(1, 0x1000, &mut buf).unwrap(), 5);
        assert_eq!(buf, [0x01, 0x02, 0x03, 0x04, 0x05]);

        // Reading from the middle of a region
        let mut buf = [0u8; 2];
        assert_eq!(provider.read_into(1, 0x1002, &mut buf).unwrap(), 2);
        assert_eq!(buf, [0x03, 0x04]);
    }

    #[test]
    fn test_unmapped_read_fails() {
        let provider = MockProvider::new();
        let mut buf = [0u8; 8];
        assert!(provider.read_into(1, 0xDEAD_0000, &mut buf).is_err());
    }

    #[test]
    fn test_short_read_at_region_tail() {
        let mut provider = MockProvider::new();
        provider.write_memory(0x2000, &[0xFF; 12]);

        let mut buf = [0u8; 64];
        assert_eq!(provider.read_into(1, 0x2000, &mut buf).unwrap(), 12);
        assert_eq!(provider.read_into(1, 0x2008, &mut buf).unwrap(), 4);
    }

    #[test]
    fn test_process_and_module_registry() {
        let mut provider = MockProvider::new();
        provider.add_process(1960, "PioneerGame.exe");
        provider.add_module(1960, "PioneerGame.exe", 0x7FF6_0000_0000);

        assert_eq!(provider.list_pids().unwrap(), vec![1960]);
        assert_eq!(provider.process_name(1960).unwrap(), "PioneerGame.exe");
        assert_eq!(
            provider.module_base(1960, "PioneerGame.exe").unwrap(),
            0x7FF6_0000_0000
        );
        assert!(provider.process_name(4).is_err());
        assert!(provider.module_base(1960, "other.dll").is_err());
    }
}
