//! Instruction encoding and decoding utilities.
//!
//! Provides bit extraction functions for the fixed RISC-V instruction fields
//! and the `Instruction` word type, which is built from the 32-character
//! binary text used by program images.

use std::fmt;
use std::str::FromStr;

use crate::common::error::InstructionFormatError;

/// Number of bits (and characters in the textual form) of an instruction word.
pub const INSTRUCTION_BITS: usize = 32;

/// Bit mask for extracting the opcode field (bits 0-6).
pub const OPCODE_MASK: u32 = 0x7F;
/// Bit mask for extracting the destination register field (bits 7-11).
pub const RD_MASK: u32 = 0x1F;
/// Bit mask for extracting the first source register field (bits 15-19).
pub const RS1_MASK: u32 = 0x1F;
/// Bit mask for extracting the second source register field (bits 20-24).
pub const RS2_MASK: u32 = 0x1F;
/// Bit mask for extracting the funct3 field (bits 12-14).
pub const FUNCT3_MASK: u32 = 0x7;
/// Bit mask for extracting the funct7 field (bits 25-31).
pub const FUNCT7_MASK: u32 = 0x7F;

/// Trait for extracting instruction fields from encoded instructions.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 0-6).
    fn opcode(&self) -> u32;

    /// Extracts the destination register field (bits 7-11).
    ///
    /// Register 0 (x0) is hardwired to zero and writes are ignored.
    fn rd(&self) -> usize;

    /// Extracts the first source register field (bits 15-19).
    fn rs1(&self) -> usize;

    /// Extracts the second source register field (bits 20-24).
    fn rs2(&self) -> usize;

    /// Extracts the funct3 field (bits 12-14).
    fn funct3(&self) -> u32;

    /// Extracts the funct7 field (bits 25-31).
    ///
    /// Distinguishes standard and alternate encodings (ADD vs SUB, SRL vs SRA).
    fn funct7(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> 7) & RD_MASK) as usize
    }

    #[inline(always)]
    fn rs1(&self) -> usize {
        ((self >> 15) & RS1_MASK) as usize
    }

    #[inline(always)]
    fn rs2(&self) -> usize {
        ((self >> 20) & RS2_MASK) as usize
    }

    #[inline(always)]
    fn funct3(&self) -> u32 {
        (self >> 12) & FUNCT3_MASK
    }

    #[inline(always)]
    fn funct7(&self) -> u32 {
        (self >> 25) & FUNCT7_MASK
    }
}

/// A fetched 32-bit instruction word.
///
/// Immutable once built. The textual form is written most significant bit
/// first, so the opcode is the last seven characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Instruction(u32);

impl Instruction {
    /// Wraps a raw encoding.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw 32-bit encoding.
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for Instruction {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl InstructionBits for Instruction {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self.0.opcode()
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        self.0.rd()
    }

    #[inline(always)]
    fn rs1(&self) -> usize {
        self.0.rs1()
    }

    #[inline(always)]
    fn rs2(&self) -> usize {
        self.0.rs2()
    }

    #[inline(always)]
    fn funct3(&self) -> u32 {
        self.0.funct3()
    }

    #[inline(always)]
    fn funct7(&self) -> u32 {
        self.0.funct7()
    }
}

impl FromStr for Instruction {
    type Err = InstructionFormatError;

    /// Parses exactly 32 `0`/`1` characters, bit 31 first.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != INSTRUCTION_BITS {
            return Err(InstructionFormatError::Length(len));
        }

        let mut raw = 0u32;
        for (position, c) in s.chars().enumerate() {
            let bit = match c {
                '0' => 0,
                '1' => 1,
                found => return Err(InstructionFormatError::NonBinary { position, found }),
            };
            raw = (raw << 1) | bit;
        }
        Ok(Self(raw))
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032b}", self.0)
    }
}
