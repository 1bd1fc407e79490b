//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains definitions for opcodes, function codes, and decoding logic for
//! the supported RV32I subset.
//!
//! # Supported instructions
//!
//! * R-type: `add`, `sub`, `sll`, `slt`, `sltu`, `xor`, `srl`, `sra`, `or`, `and`.
//! * I-type: `addi`, `slti`, `sltiu`, `xori`, `ori`, `andi`, `slli`, `srli`, `srai`, `lw`.
//! * S-type: `sw`.
//! * B-type: `beq`.

/// Application Binary Interface (ABI) register name mappings.
pub mod abi;

/// Instruction field extraction and opcode classification.
pub mod decode;

/// Instruction disassembler for debug tracing and program listings.
pub mod disasm;

/// Instruction encoding structures and bit extraction utilities.
pub mod instruction;

/// Base integer instruction set encodings (opcodes, funct3, funct7).
pub mod rv32i;
