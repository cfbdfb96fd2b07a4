//! Configuration validation
//!
//! Checks values against the ranges the scanner can actually work with
//! before any hardware session is opened.

use super::loader::{Config, ConfigError, ScanConfig, TargetConfig};

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates the entire configuration
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        Self::validate_target(&config.target)?;
        Self::validate_scan(&config.scan)?;
        Ok(())
    }

    fn validate_target(target: &TargetConfig) -> Result<(), ConfigError> {
        if target.process_name.is_empty() {
            return Err(ConfigError::Invalid(
                "Target process name cannot be empty".to_string(),
            ));
        }

        if target.module_name.is_empty() {
            return Err(ConfigError::Invalid(
                "Target module name cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    fn validate_scan(scan: &ScanConfig) -> Result<(), ConfigError> {
        // Chunk size must cover whole pointer slots and align with pages
        if scan.chunk_size == 0 || !scan.chunk_size.is_power_of_two() {
            return Err(ConfigError::Invalid(
                "Chunk size must be a power of 2".to_string(),
            ));
        }

        if scan.chunk_size < 0x1000 {
            return Err(ConfigError::Invalid(
                "Chunk size must be at least one page (0x1000)".to_string(),
            ));
        }

        if scan.radius_mb == 0 {
            return Err(ConfigError::Invalid(
                "Scan radius must be at least 1 MiB".to_string(),
            ));
        }

        if scan.radius_mb > 4096 {
            return Err(ConfigError::Invalid(
                "Scan radius cannot exceed 4096 MiB".to_string(),
            ));
        }

        // Pure noise scores at most 10; a threshold at or below that would
        // flood the report
        if scan.min_confidence <= 10 {
            return Err(ConfigError::Invalid(
                "Minimum confidence must be above 10".to_string(),
            ));
        }

        Ok(())
    }
}

/// Validates a configuration
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    ConfigValidator::validate(config)
}
