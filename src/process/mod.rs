//! Target process resolution and session context
//!
//! Resolves the game process from the provider's PID list and bundles the
//! resolved state into a [`TargetProcess`] that is passed by reference into
//! every scanning component. No component holds process state of its own.

use crate::config::TargetConfig;
use crate::core::types::{Address, ScanError, ScanResult};
use crate::provider::{MemoryProvider, ProviderError};
use tracing::{info, warn};

/// A resolved target: provider session, PID, and module base.
///
/// All remote reads made during scanning go through this context.
pub struct TargetProcess<'a> {
    provider: &'a dyn MemoryProvider,
    pid: u32,
    name: String,
    module_base: Address,
}

impl<'a> TargetProcess<'a> {
    pub fn new(
        provider: &'a dyn MemoryProvider,
        pid: u32,
        name: String,
        module_base: Address,
    ) -> Self {
        TargetProcess {
            provider,
            pid,
            name,
            module_base,
        }
    }

    pub fn pid(&self) -> u32 {
        self.pid
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn module_base(&self) -> Address {
        self.module_base
    }

    /// Bulk read into a caller-owned buffer; short counts are reported
    pub fn read_into(&self, address: u64, buf: &mut [u8]) -> Result<usize, ProviderError> {
        self.provider.read_into(self.pid, address, buf)
    }

    /// Read a little-endian u64; errors on anything less than 8 bytes
    pub fn read_u64(&self, address: u64) -> Result<u64, ProviderError> {
        self.provider.read_u64(self.pid, address)
    }

    /// Read a little-endian u32; errors on anything less than 4 bytes
    pub fn read_u32(&self, address: u64) -> Result<u32, ProviderError> {
        self.provider.read_u32(self.pid, address)
    }
}

/// Find the target process by name.
///
/// Walks the PID list looking for a name containing `process_name`. When no
/// match is found, processes matching any of the configured hint substrings
/// are logged to help diagnose a renamed executable. The configured
/// fallback PID, if any, is consulted last and only when it is actually
/// present in the PID list; trusting an arbitrary PID is a correctness
/// hazard, so the fallback is opt-in and logged loudly.
pub fn find_target(
    provider: &dyn MemoryProvider,
    config: &TargetConfig,
) -> ScanResult<(u32, String)> {
    let pids = provider.list_pids().map_err(ScanError::ProcessEnumeration)?;
    info!("Found {} processes", pids.len());

    let mut near_misses = Vec::new();

    for &pid in &pids {
        let Ok(name) = provider.process_name(pid) else {
            continue;
        };

        if name.contains(&config.process_name) {
            info!("Found target: {} (PID: {})", name, pid);
            return Ok((pid, name));
        }

        if config
            .process_hints
            .iter()
            .any(|hint| name.contains(hint.as_str()))
        {
            near_misses.push((pid, name));
        }
    }

    if !near_misses.is_empty() {
        warn!(
            "No process matched '{}', but {} related process(es) were found:",
            config.process_name,
            near_misses.len()
        );
        for (pid, name) in &near_misses {
            warn!("    {} (PID: {})", name, pid);
        }
        warn!("The process name may have changed; check the exact name on the target machine");
    }

    if let Some(fallback) = config.fallback_pid {
        if pids.contains(&fallback) {
            warn!(
                "Name match failed; using configured fallback PID {} without verification",
                fallback
            );
            let name = provider
                .process_name(fallback)
                .unwrap_or_else(|_| config.process_name.clone());
            return Ok((fallback, name));
        }
        warn!("Configured fallback PID {} is not in the process list", fallback);
    }

    Err(ScanError::ProcessNotFound(config.process_name.clone()))
}

/// Resolve the base address of the game module within the target process
pub fn resolve_module(
    provider: &dyn MemoryProvider,
    pid: u32,
    module_name: &str,
) -> ScanResult<Address> {
    let base = provider
        .module_base(pid, module_name)
        .map_err(|_| ScanError::ModuleNotFound(module_name.to_string()))?;
    info!("Module {} base: 0x{:X}", module_name, base);
    Ok(Address::new(base))
}
