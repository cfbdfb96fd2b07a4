//! MemProcFS-backed provider
//!
//! Concrete [`MemoryProvider`] over a MemProcFS session, typically driving
//! DMA acquisition hardware (`-device fpga`). The native `vmm` library is
//! loaded by the `memprocfs` crate at session startup; the session detaches
//! when the provider is dropped.

use super::{MemoryProvider, ProviderError};
use memprocfs::{Vmm, VmmProcess, FLAG_NOCACHE};
use tracing::{debug, info};

/// Remote memory provider over a MemProcFS/DMA session
pub struct VmmProvider {
    vmm: Vmm<'static>,
}

impl VmmProvider {
    /// Establish a session against the backing library and device.
    ///
    /// `library_path` points at `vmm.dll` / `vmm.so`; `device` is the
    /// LeechCore device string (e.g. `fpga`). Fails when the library or the
    /// hardware session cannot be brought up; nothing is retried.
    pub fn connect(
        library_path: &str,
        device: &str,
        extra_args: &[String],
    ) -> Result<Self, ProviderError> {
        info!("Initializing DMA session via {}", library_path);

        let mut args: Vec<&str> = vec!["", "-device", device];
        args.extend(extra_args.iter().map(String::as_str));

        let vmm = Vmm::new(library_path, &args)
            .map_err(|e| ProviderError::InitFailed(e.to_string()))?;

        info!("DMA session established (device: {})", device);
        Ok(VmmProvider { vmm })
    }

    fn process(&self, pid: u32) -> Result<VmmProcess<'_>, ProviderError> {
        self.vmm
            .process_from_pid(pid)
            .map_err(|_| ProviderError::ProcessUnavailable(pid))
    }
}

impl MemoryProvider for VmmProvider {
    fn list_pids(&self) -> Result<Vec<u32>, ProviderError> {
        let processes = self
            .vmm
            .process_list()
            .map_err(|e| ProviderError::Other(e.to_string()))?;
        debug!("Enumerated {} processes", processes.len());
        Ok(processes.iter().map(|p| p.pid).collect())
    }

    fn process_name(&self, pid: u32) -> Result<String, ProviderError> {
        let info = self
            .process(pid)?
            .info()
            .map_err(|_| ProviderError::ProcessUnavailable(pid))?;
        // The short name is truncated at 15 characters; prefer the long one.
        if info.name_long.is_empty() {
            Ok(info.name)
        } else {
            Ok(info.name_long)
        }
    }

    fn module_base(&self, pid: u32, module_name: &str) -> Result<u64, ProviderError> {
        self.process(pid)?
            .get_module_base(module_name)
            .map_err(|_| ProviderError::ModuleNotFound(module_name.to_string()))
    }

    fn read_into(&self, pid: u32, address: u64, buf: &mut [u8]) -> Result<usize, ProviderError> {
        let size = buf.len();
        self.process(pid)?
            .mem_read_into(address, FLAG_NOCACHE, buf)
            .map_err(|e| ProviderError::ReadFailed {
                address,
                size,
                reason: e.to_string(),
            })
    }
}
