//! Error types for the scan pipeline

use crate::provider::ProviderError;
use thiserror::Error;

/// Errors raised at the pipeline gates.
///
/// Transient read failures during scanning never surface here; they are
/// absorbed at the call site as missing signal. Only the gates (provider
/// session, process discovery, module resolution) are fatal.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Invalid memory address: {0}")]
    InvalidAddress(String),

    #[error("Process not found: {0}")]
    ProcessNotFound(String),

    #[error("Module not found: {0}")]
    ModuleNotFound(String),

    #[error("Failed to enumerate processes: {0}")]
    ProcessEnumeration(#[source] ProviderError),

    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),
}

/// Result type alias for pipeline operations
pub type ScanResult<T> = Result<T, ScanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ScanError::ProcessNotFound("PioneerGame".to_string());
        assert_eq!(err.to_string(), "Process not found: PioneerGame");

        let err = ScanError::ModuleNotFound("PioneerGame.exe".to_string());
        assert_eq!(err.to_string(), "Module not found: PioneerGame.exe");

        let err = ScanError::InvalidAddress("0xZZ".to_string());
        assert_eq!(err.to_string(), "Invalid memory address: 0xZZ");
    }

    #[test]
    fn test_from_provider_error() {
        let provider_err = ProviderError::InitFailed("no device".to_string());
        let err: ScanError = provider_err.into();
        assert!(matches!(err, ScanError::Provider(_)));
        assert!(err.to_string().contains("no device"));
    }

    #[test]
    fn test_scan_result_type() {
        fn gate() -> ScanResult<u32> {
            Ok(1960)
        }
        assert_eq!(gate().unwrap(), 1960);
    }
}
