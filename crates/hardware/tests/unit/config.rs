//! # Configuration Tests
//!
//! JSON parsing with partial documents, defaults, backing aliases, and
//! error reporting for unreadable or malformed files.

use std::fs;
use std::path::PathBuf;

use pretty_assertions::assert_eq;
use rv32sc_core::common::ConfigError;
use rv32sc_core::config::{Config, GeneralConfig, MemoryBacking, MemoryConfig};
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(
        config,
        Config {
            general: GeneralConfig {
                trace_instructions: false,
                max_cycles: None,
            },
            memory: MemoryConfig {
                backing: MemoryBacking::File,
                path: PathBuf::from("data_memory.bin"),
                size_bytes: 64 * 1024,
            },
        }
    );
}

#[test]
fn test_empty_object_uses_defaults() {
    assert_eq!(Config::from_json("{}").unwrap(), Config::default());
}

#[test]
fn test_partial_memory_section() {
    let config = Config::from_json(r#"{ "memory": { "size_bytes": 512 } }"#).unwrap();
    assert_eq!(config.memory.size_bytes, 512);
    assert_eq!(config.memory.backing, MemoryBacking::File);
    assert_eq!(config.memory.path, PathBuf::from("data_memory.bin"));
    assert_eq!(config.general, GeneralConfig::default());
}

#[test]
fn test_backing_aliases() {
    for name in ["Buffer", "buffer", "BUFFER"] {
        let json = format!(r#"{{ "memory": {{ "backing": "{name}" }} }}"#);
        assert_eq!(
            Config::from_json(&json).unwrap().memory.backing,
            MemoryBacking::Buffer
        );
    }
    let config = Config::from_json(r#"{ "memory": { "backing": "file" } }"#).unwrap();
    assert_eq!(config.memory.backing, MemoryBacking::File);
}

#[test]
fn test_wrong_field_type_is_parse_error() {
    let err = Config::from_json(r#"{ "general": { "max_cycles": "lots" } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sim.json");
    fs::write(
        &path,
        r#"{ "general": { "max_cycles": 10 }, "memory": { "path": "out.bin" } }"#,
    )
    .unwrap();

    let config = Config::from_file(&path).unwrap();
    assert_eq!(config.general.max_cycles, Some(10));
    assert_eq!(config.memory.path, PathBuf::from("out.bin"));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");
    let err = Config::from_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Io { path: p, .. } if p == path));
}
