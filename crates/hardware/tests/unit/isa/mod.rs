//! # ISA Tests
//!
//! This module aggregates tests for:
//! - Textual instruction words and field extraction.
//! - Opcode classification.
//! - Disassembler mnemonic generation.


/// Disassembler output for every supported form.
pub mod disasm;
