//! Global Constants.
//!
//! Widths shared by the datapath units and the program loader.

/// Size of a data memory word in bytes.
pub const WORD_BYTES: usize = 4;

/// Size of an instruction in bytes; the sequential PC increment.
pub const INSTRUCTION_BYTES: u32 = 4;
