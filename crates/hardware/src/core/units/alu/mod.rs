//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the 32-bit integer ALU of the datapath together with
//! its ALU control, which turns the control unit's operation class plus the
//! instruction's `funct3`/`funct7` fields into a concrete [`AluOp`].
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub
//! - [`logic`]:      Or, And, Xor, Slt, Sltu
//! - [`shifts`]:     Sll, Srl, Sra

/// Integer arithmetic operations (add, subtract).
pub mod arithmetic;

/// Bitwise logical and comparison operations (or, and, xor, slt).
pub mod logic;

/// Shift operations (sll, srl, sra).
pub mod shifts;

use crate::common::error::DecodeError;
use crate::core::signals::{AluOp, AluOpClass};
use crate::isa::rv32i::{funct3, funct7, opcodes};

/// Arithmetic Logic Unit (ALU) for integer operations.
#[derive(Clone, Copy, Debug, Default)]
pub struct Alu;

impl Alu {
    /// ALU control: selects the operation for the current instruction.
    ///
    /// Branches always subtract (equality is read from the zero flag) and
    /// loads/stores always add (address computation). Arithmetic classes
    /// dispatch on `funct3`; `funct7` separates ADD/SUB (R-type only) and
    /// SRL/SRA.
    ///
    /// # Errors
    ///
    /// `DecodeError::UnsupportedFunction` for any `funct3`/`funct7`
    /// combination outside the subset, including the M extension.
    pub fn control(class: AluOpClass, f3: u32, f7: u32) -> Result<AluOp, DecodeError> {
        let op = match class {
            AluOpClass::Branch => Some(AluOp::Sub),
            AluOpClass::LoadStore => Some(AluOp::Add),
            AluOpClass::RegReg => match (f3, f7) {
                (funct3::ADD_SUB, funct7::DEFAULT) => Some(AluOp::Add),
                (funct3::ADD_SUB, funct7::ALT) => Some(AluOp::Sub),
                (funct3::SLL, funct7::DEFAULT) => Some(AluOp::Sll),
                (funct3::SLT, funct7::DEFAULT) => Some(AluOp::Slt),
                (funct3::SLTU, funct7::DEFAULT) => Some(AluOp::Sltu),
                (funct3::XOR, funct7::DEFAULT) => Some(AluOp::Xor),
                (funct3::SRL_SRA, funct7::DEFAULT) => Some(AluOp::Srl),
                (funct3::SRL_SRA, funct7::ALT) => Some(AluOp::Sra),
                (funct3::OR, funct7::DEFAULT) => Some(AluOp::Or),
                (funct3::AND, funct7::DEFAULT) => Some(AluOp::And),
                _ => None,
            },
            // funct7 here is imm[11:5]; it only carries meaning for shifts.
            AluOpClass::RegImm => match (f3, f7) {
                (funct3::ADD_SUB, _) => Some(AluOp::Add),
                (funct3::SLT, _) => Some(AluOp::Slt),
                (funct3::SLTU, _) => Some(AluOp::Sltu),
                (funct3::XOR, _) => Some(AluOp::Xor),
                (funct3::OR, _) => Some(AluOp::Or),
                (funct3::AND, _) => Some(AluOp::And),
                (funct3::SLL, funct7::DEFAULT) => Some(AluOp::Sll),
                (funct3::SRL_SRA, funct7::DEFAULT) => Some(AluOp::Srl),
                (funct3::SRL_SRA, funct7::ALT) => Some(AluOp::Sra),
                _ => None,
            },
        };

        op.ok_or(DecodeError::UnsupportedFunction {
            opcode: class_opcode(class),
            funct3: f3,
            funct7: f7,
        })
    }

    /// Executes an ALU operation.
    ///
    /// # Arguments
    ///
    /// * `a`  - First operand (`rs1`).
    /// * `b`  - Second operand (`rs2` or immediate, also used as shift amount).
    /// * `op` - The ALU operation to perform.
    ///
    /// # Returns
    ///
    /// The result and the zero flag, which is set iff the result is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use rv32sc_core::core::signals::AluOp;
    /// use rv32sc_core::core::units::alu::Alu;
    ///
    /// assert_eq!(Alu::execute(5, 3, AluOp::Sub), (2, false));
    /// assert_eq!(Alu::execute(3, 3, AluOp::Sub), (0, true));
    ///
    /// // Signed vs unsigned comparison
    /// assert_eq!(Alu::execute(-1, 1, AluOp::Slt), (1, false));
    /// assert_eq!(Alu::execute(-1, 1, AluOp::Sltu), (0, true));
    /// ```
    pub fn execute(a: i32, b: i32, op: AluOp) -> (i32, bool) {
        let result = match op {
            AluOp::Add => arithmetic::add(a, b),
            AluOp::Sub => arithmetic::sub(a, b),
            AluOp::Or => logic::or(a, b),
            AluOp::And => logic::and(a, b),
            AluOp::Xor => logic::xor(a, b),
            AluOp::Slt => logic::slt(a, b),
            AluOp::Sltu => logic::sltu(a, b),
            AluOp::Sll => shifts::sll(a, b),
            AluOp::Srl => shifts::srl(a, b),
            AluOp::Sra => shifts::sra(a, b),
        };
        (result, result == 0)
    }
}

/// Opcode reported in decode errors for an arithmetic class.
const fn class_opcode(class: AluOpClass) -> u32 {
    match class {
        AluOpClass::RegReg => opcodes::OP_REG,
        AluOpClass::RegImm => opcodes::OP_IMM,
        AluOpClass::Branch => opcodes::OP_BRANCH,
        AluOpClass::LoadStore => opcodes::OP_LOAD,
    }
}
