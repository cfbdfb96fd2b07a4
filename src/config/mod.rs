//! Configuration module for gworld-scan
//!
//! Provides TOML configuration loading, validation, and defaults matching
//! the supported game build. Structural offsets live here because they are
//! ground-truth input that changes with engine updates, never derived.

mod loader;
mod validator;

pub use loader::{
    load_config, Config, ConfigError, ConfigLoader, LoggingConfig, OffsetsConfig, ProviderConfig,
    ScanConfig, TargetConfig,
};
pub use validator::{validate_config, ConfigValidator};

// Configuration result type
pub type ConfigResult<T> = Result<T, ConfigError>;
