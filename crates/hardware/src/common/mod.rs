//! Common utilities and types used throughout the simulator.
//!
//! This module provides the building blocks shared by every datapath unit:
//! 1. **Constants:** Word and instruction widths.
//! 2. **Error Handling:** The load, decode, memory, register, and step error types.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types for loading, decoding, and executing programs.
pub mod error;

pub use error::{
    ConfigError, DecodeError, ExecError, InstructionFormatError, LoadError, MemoryError,
    RegisterError, SetupError, StepError,
};
