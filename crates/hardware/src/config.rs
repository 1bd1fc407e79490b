//! Configuration system for the simulator.
//!
//! This module defines the configuration structures used to parameterize a
//! run. It provides:
//! 1. **Defaults:** Baseline constants (data memory file and size).
//! 2. **Structures:** General run settings and data memory settings.
//! 3. **Enums:** Data memory backing type.
//!
//! Configuration is supplied as JSON (every field optional) or built with
//! `Config::default()`; the CLI overrides individual fields from its flags.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::common::error::ConfigError;

/// Default configuration constants for the simulator.
mod defaults {
    /// File that backs the data memory when no path is configured.
    pub const DATA_MEMORY_PATH: &str = "data_memory.bin";

    /// Data memory size (64 KiB).
    pub const DATA_MEMORY_SIZE: usize = 64 * 1024;
}

/// Data memory backing store types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum MemoryBacking {
    /// Host file, truncated at start and kept after the run.
    #[default]
    #[serde(alias = "file", alias = "FILE")]
    File,

    /// Heap buffer, discarded after the run.
    #[serde(alias = "buffer", alias = "BUFFER")]
    Buffer,
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use rv32sc_core::config::{Config, MemoryBacking};
///
/// let json = r#"{
///     "general": { "trace_instructions": true, "max_cycles": 1000 },
///     "memory": { "backing": "Buffer", "size_bytes": 4096 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.general.max_cycles, Some(1000));
/// assert_eq!(config.memory.backing, MemoryBacking::Buffer);
/// assert_eq!(config.memory.size_bytes, 4096);
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// General run settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Data memory configuration
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl Config {
    /// Parses a JSON configuration string.
    ///
    /// # Errors
    ///
    /// `ConfigError::Parse` if the JSON is malformed or has wrong field types.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// `ConfigError::Io` if the file cannot be read, `ConfigError::Parse`
    /// if it is not valid configuration.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}

/// General run settings.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct GeneralConfig {
    /// Log each cycle's instruction, control signals, and results at debug level
    #[serde(default)]
    pub trace_instructions: bool,

    /// Stop the run after this many cycles even if instructions remain
    #[serde(default)]
    pub max_cycles: Option<u64>,
}

/// Data memory configuration.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct MemoryConfig {
    /// Backing store type
    #[serde(default)]
    pub backing: MemoryBacking,

    /// Backing file path (file backing only)
    #[serde(default = "MemoryConfig::default_path")]
    pub path: PathBuf,

    /// Data memory size in bytes
    #[serde(default = "MemoryConfig::default_size")]
    pub size_bytes: usize,
}

impl MemoryConfig {
    /// Returns the default backing file path.
    fn default_path() -> PathBuf {
        PathBuf::from(defaults::DATA_MEMORY_PATH)
    }

    /// Returns the default data memory size.
    const fn default_size() -> usize {
        defaults::DATA_MEMORY_SIZE
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            backing: MemoryBacking::default(),
            path: Self::default_path(),
            size_bytes: Self::default_size(),
        }
    }
}
