//! Error definitions.
//!
//! This module defines the error taxonomy of the simulator. It provides:
//! 1. **Load Errors:** Failures reading or parsing a program image, raised before any cycle runs.
//! 2. **Decode Errors:** Opcodes or function codes outside the supported instruction subset.
//! 3. **Memory Errors:** Misaligned, out-of-range, or I/O failures of the data memory.
//! 4. **Register Errors:** Register indices outside `x0`-`x31`.
//! 5. **Step Errors:** Any of the above raised inside a cycle, tagged with the faulting PC.
//! 6. **Setup Errors:** Unreadable configuration, or a simulator that cannot be built.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A textual instruction word that is not exactly 32 binary digits.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InstructionFormatError {
    /// The word does not have exactly 32 characters.
    #[error("expected 32 binary digits, found {0} characters")]
    Length(usize),

    /// A character other than `0` or `1` was found.
    #[error("invalid character {found:?} at position {position}")]
    NonBinary {
        /// Zero-based character position, counted from the most significant bit.
        position: usize,
        /// The offending character.
        found: char,
    },
}

/// Failure to build instruction memory from a program image.
#[derive(Debug, Error)]
pub enum LoadError {
    /// No program path was provided.
    #[error("program path was not provided")]
    EmptyPath,

    /// The program image could not be read.
    #[error("could not read program image '{path}': {source}")]
    Io {
        /// Path of the program image.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A line of the image is not a valid instruction word.
    #[error("invalid program image: line {line}: {source}")]
    InvalidInstruction {
        /// One-based line number in the image.
        line: usize,
        /// What is wrong with the line.
        #[source]
        source: InstructionFormatError,
    },
}

/// An instruction outside the supported subset.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The opcode is not in the control unit's table.
    #[error("instruction not supported: opcode {opcode:#09b}")]
    UnsupportedOpcode {
        /// The 7-bit opcode.
        opcode: u32,
    },

    /// The opcode is known but the funct3/funct7 combination is not.
    #[error(
        "instruction not supported: opcode {opcode:#09b} funct3 {funct3:#05b} funct7 {funct7:#09b}"
    )]
    UnsupportedFunction {
        /// The 7-bit opcode.
        opcode: u32,
        /// The 3-bit funct3 field.
        funct3: u32,
        /// The 7-bit funct7 field.
        funct7: u32,
    },
}

/// A data memory access that could not be performed.
#[derive(Debug, Error)]
pub enum MemoryError {
    /// The address is not a multiple of the access width.
    #[error("misaligned data memory access at {0:#010x}")]
    Misaligned(u32),

    /// The access extends past the end of the data memory.
    #[error("data memory access at {addr:#010x} outside {size} bytes")]
    OutOfRange {
        /// Byte address of the access.
        addr: u32,
        /// Size of the data memory in bytes.
        size: usize,
    },

    /// The backing store failed.
    #[error("data memory backing store: {0}")]
    Io(#[from] io::Error),
}

/// A register index outside `x0`-`x31`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RegisterError {
    /// The index does not name a register.
    #[error("register index {0} out of range (0-31)")]
    IndexOutOfRange(usize),
}

/// Any error raised by one of the datapath stages.
#[derive(Debug, Error)]
pub enum ExecError {
    /// Decode stage: unsupported instruction.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Memory stage: failed data memory access.
    #[error(transparent)]
    Memory(#[from] MemoryError),

    /// Register read or write with an invalid index.
    #[error(transparent)]
    Register(#[from] RegisterError),
}

/// A cycle that faulted. The datapath state is unchanged by the failing cycle.
#[derive(Debug, Error)]
#[error("fault at pc {pc:#010x}: {source}")]
pub struct StepError {
    /// Address of the instruction that faulted.
    pub pc: u32,
    /// What went wrong.
    #[source]
    pub source: ExecError,
}

/// Failure to read a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("could not read config '{path}': {source}")]
    Io {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The file is not valid configuration JSON.
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failure to set up a simulator from a program image.
#[derive(Debug, Error)]
pub enum SetupError {
    /// The program image could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// The data memory could not be opened.
    #[error(transparent)]
    Memory(#[from] MemoryError),
}
