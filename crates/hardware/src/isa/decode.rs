//! RISC-V Instruction Decoder.
//!
//! This module splits a 32-bit instruction word into its fixed fields and
//! classifies the opcode into an `InstructionClass`. The class is decided
//! once per instruction; every later stage matches on it instead of on raw
//! opcode bits. Unknown opcodes are the single "instruction not supported"
//! error path.

use crate::common::error::DecodeError;
use crate::core::units::imm_gen::ImmFormat;
use crate::isa::instruction::{Instruction, InstructionBits};
use crate::isa::rv32i::opcodes;

/// Instruction class selected by the major opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InstructionClass {
    /// Register-register arithmetic (R-type, `0110011`).
    RegReg,
    /// Register-immediate arithmetic (I-type, `0010011`).
    RegImm,
    /// Word load (I-type, `0000011`).
    Load,
    /// Word store (S-type, `0100011`).
    Store,
    /// Conditional branch (B-type, `1100011`).
    Branch,
}

impl InstructionClass {
    /// Classifies a 7-bit opcode.
    ///
    /// # Errors
    ///
    /// `DecodeError::UnsupportedOpcode` for any opcode outside the subset.
    pub fn from_opcode(opcode: u32) -> Result<Self, DecodeError> {
        match opcode {
            opcodes::OP_REG => Ok(Self::RegReg),
            opcodes::OP_IMM => Ok(Self::RegImm),
            opcodes::OP_LOAD => Ok(Self::Load),
            opcodes::OP_STORE => Ok(Self::Store),
            opcodes::OP_BRANCH => Ok(Self::Branch),
            _ => Err(DecodeError::UnsupportedOpcode { opcode }),
        }
    }

    /// Immediate encoding used by this class; R-type carries none.
    pub const fn imm_format(self) -> Option<ImmFormat> {
        match self {
            Self::RegReg => None,
            Self::RegImm | Self::Load => Some(ImmFormat::I),
            Self::Store => Some(ImmFormat::S),
            Self::Branch => Some(ImmFormat::B),
        }
    }
}

/// Fixed fields of an instruction word.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Decoded {
    /// Raw 32-bit instruction encoding.
    pub raw: u32,
    /// Extracted opcode field.
    pub opcode: u32,
    /// Destination register index.
    pub rd: usize,
    /// First source register index.
    pub rs1: usize,
    /// Second source register index.
    pub rs2: usize,
    /// Function code field 3.
    pub funct3: u32,
    /// Function code field 7.
    pub funct7: u32,
}

/// Extracts the fixed fields of an instruction word.
pub fn decode(inst: Instruction) -> Decoded {
    Decoded {
        raw: inst.raw(),
        opcode: inst.opcode(),
        rd: inst.rd(),
        rs1: inst.rs1(),
        rs2: inst.rs2(),
        funct3: inst.funct3(),
        funct7: inst.funct7(),
    }
}
