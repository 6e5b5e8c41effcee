//! Configuration system for the simulator.
//!
//! This module defines the configuration structures used to parameterize a machine.
//! It provides:
//! 1. **Defaults:** Baseline constants (start PC, disk capacity).
//! 2. **Structures:** Hierarchical config for general, memory and disk settings.
//! 3. **Enums:** How load/store instructions interpret their base field.
//!
//! Configuration is supplied as JSON via [`Config::from_json`], or use
//! `Config::default()` for the canonical machine.

use serde::Deserialize;
use thiserror::Error;

use crate::common::constants::DISK_CAPACITY;

/// Default configuration constants for the simulator.
mod defaults {
    /// Initial program counter.
    pub const START_PC: u32 = 0;

    /// Capacity of the attached disk in bytes.
    pub const DISK_CAPACITY: usize = super::DISK_CAPACITY;
}

/// Errors produced while loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON document could not be parsed.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field parsed but holds an unusable value.
    #[error("invalid configuration value for `{field}`: {reason}")]
    Invalid {
        /// Dotted path of the offending field.
        field: &'static str,
        /// Why the value was rejected.
        reason: &'static str,
    },
}

/// How LD and PUT turn their 3-bit base field into an address component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum BaseAddressing {
    /// The field's numeric value (0-7) is added to the offset.
    #[default]
    Field,
    /// The field names a register whose contents are added to the offset.
    Register,
}

/// Root configuration.
///
/// # Examples
///
/// ```
/// use sim32_core::config::{BaseAddressing, Config};
///
/// let json = r#"{
///     "general": { "trace_instructions": true },
///     "memory": { "base_addressing": "Register" }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.memory.base_addressing, BaseAddressing::Register);
/// assert_eq!(config.disk.capacity_bytes, 102_400);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Main memory addressing behavior
    #[serde(default)]
    pub memory: MemoryConfig,
    /// Attached disk
    #[serde(default)]
    pub disk: DiskConfig,
}

impl Config {
    /// Parses and validates a JSON configuration document.
    ///
    /// Missing sections and fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown enum values, and
    /// [`ConfigError::Invalid`] if a value is out of range.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks cross-field constraints that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.disk.capacity_bytes == 0 {
            return Err(ConfigError::Invalid {
                field: "disk.capacity_bytes",
                reason: "must be greater than zero",
            });
        }
        Ok(())
    }
}

/// General simulation settings.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Emit a `debug` event with the register file after every instruction.
    #[serde(default)]
    pub trace_instructions: bool,

    /// Program counter value after construction or reset.
    #[serde(default = "GeneralConfig::default_start_pc")]
    pub start_pc: u32,
}

impl GeneralConfig {
    const fn default_start_pc() -> u32 {
        defaults::START_PC
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            start_pc: Self::default_start_pc(),
        }
    }
}

/// Main memory settings.
///
/// The memory size itself is fixed at [`crate::common::MEMORY_SIZE`].
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct MemoryConfig {
    /// Interpretation of the LD/PUT base field.
    #[serde(default)]
    pub base_addressing: BaseAddressing,
}

/// Disk settings.
#[derive(Debug, Clone, Deserialize)]
pub struct DiskConfig {
    /// Disk capacity in bytes.
    #[serde(default = "DiskConfig::default_capacity")]
    pub capacity_bytes: usize,
}

impl DiskConfig {
    const fn default_capacity() -> usize {
        defaults::DISK_CAPACITY
    }
}

impl Default for DiskConfig {
    fn default() -> Self {
        Self {
            capacity_bytes: Self::default_capacity(),
        }
    }
}
