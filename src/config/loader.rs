//! Configuration loading for gworld-scan
//!
//! Handles loading configuration from TOML files and merging with the
//! defaults for the supported game build. TOML hex integer literals are
//! used for offsets, e.g. `anchor_offset = 0x7E97580`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub target: TargetConfig,

    #[serde(default)]
    pub provider: ProviderConfig,

    #[serde(default)]
    pub scan: ScanConfig,

    #[serde(default)]
    pub offsets: OffsetsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Target process and module selection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetConfig {
    /// Substring the process name must contain
    #[serde(default = "default_process_name")]
    pub process_name: String,
    /// Substrings used to surface near-miss processes when no match is found
    #[serde(default = "default_process_hints")]
    pub process_hints: Vec<String>,
    /// Module whose base anchors all offsets
    #[serde(default = "default_module_name")]
    pub module_name: String,
    /// Optional last-resort PID used only when name matching fails and the
    /// PID is present in the enumerated list. Off unless explicitly set.
    #[serde(default)]
    pub fallback_pid: Option<u32>,
}

/// Remote memory provider session settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Path to the native vmm library (vmm.dll / vmm.so)
    #[serde(default = "default_library_path")]
    pub library_path: String,
    /// LeechCore device string
    #[serde(default = "default_device")]
    pub device: String,
    /// Extra initialization arguments passed straight through
    #[serde(default)]
    pub extra_args: Vec<String>,
}

/// Scan window and confidence tunables
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Known-good anchor offset from the module base (GNames)
    #[serde(default = "default_anchor_offset")]
    pub anchor_offset: u64,
    /// Scan radius around the anchor, in MiB
    #[serde(default = "default_radius_mb")]
    pub radius_mb: u64,
    /// Bytes per bulk chunk read
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
    /// Minimum validator score for a candidate
    #[serde(default = "default_min_confidence")]
    pub min_confidence: u32,
}

/// UWorld/ULevel field offsets for the supported engine build
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OffsetsConfig {
    #[serde(default = "default_persistent_level")]
    pub persistent_level: u64,
    #[serde(default = "default_owning_game_instance")]
    pub owning_game_instance: u64,
    #[serde(default = "default_levels")]
    pub levels: u64,
    #[serde(default = "default_game_state")]
    pub game_state: u64,
    #[serde(default = "default_level_actors")]
    pub level_actors: u64,
    #[serde(default = "default_level_actor_count")]
    pub level_actor_count: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Configuration loader
pub struct ConfigLoader {
    config_path: PathBuf,
}

impl ConfigLoader {
    /// Creates a new configuration loader
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        ConfigLoader {
            config_path: path.as_ref().to_path_buf(),
        }
    }

    /// Loads configuration from file
    pub fn load(&self) -> Result<Config, ConfigError> {
        if !self.config_path.exists() {
            return Err(ConfigError::FileNotFound(
                self.config_path.display().to_string(),
            ));
        }

        let contents = fs::read_to_string(&self.config_path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Loads configuration or returns defaults if the file doesn't exist
    pub fn load_or_default(&self) -> Config {
        self.load().unwrap_or_default()
    }

    /// Saves configuration to file
    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(config)?;
        fs::write(&self.config_path, contents)?;
        Ok(())
    }
}

/// Loads configuration from the default location
pub fn load_config() -> Config {
    ConfigLoader::new("config.toml").load_or_default()
}

// Default functions for serde

fn default_process_name() -> String {
    "PioneerGame".to_string()
}

fn default_process_hints() -> Vec<String> {
    vec![
        "Pioneer".to_string(),
        "ArcRaiders".to_string(),
        "Embark".to_string(),
    ]
}

fn default_module_name() -> String {
    "PioneerGame.exe".to_string()
}

fn default_library_path() -> String {
    "vmm.dll".to_string()
}

fn default_device() -> String {
    "fpga".to_string()
}

fn default_anchor_offset() -> u64 {
    0x7E97580
}

fn default_radius_mb() -> u64 {
    100
}

fn default_chunk_size() -> usize {
    2 * 1024 * 1024
}

fn default_min_confidence() -> u32 {
    50
}

fn default_persistent_level() -> u64 {
    0x38
}

fn default_owning_game_instance() -> u64 {
    0x1A0
}

fn default_levels() -> u64 {
    0x178
}

fn default_game_state() -> u64 {
    0x158
}

fn default_level_actors() -> u64 {
    0xA0
}

fn default_level_actor_count() -> u64 {
    0xA8
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TargetConfig {
    fn default() -> Self {
        TargetConfig {
            process_name: default_process_name(),
            process_hints: default_process_hints(),
            module_name: default_module_name(),
            fallback_pid: None,
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        ProviderConfig {
            library_path: default_library_path(),
            device: default_device(),
            extra_args: Vec::new(),
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            anchor_offset: default_anchor_offset(),
            radius_mb: default_radius_mb(),
            chunk_size: default_chunk_size(),
            min_confidence: default_min_confidence(),
        }
    }
}

impl Default for OffsetsConfig {
    fn default() -> Self {
        OffsetsConfig {
            persistent_level: default_persistent_level(),
            owning_game_instance: default_owning_game_instance(),
            levels: default_levels(),
            game_state: default_game_state(),
            level_actors: default_level_actors(),
            level_actor_count: default_level_actor_count(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: default_log_level(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            target: TargetConfig::default(),
            provider: ProviderConfig::default(),
            scan: ScanConfig::default(),
            offsets: OffsetsConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}
