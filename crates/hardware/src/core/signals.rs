//! Datapath control signals and operation types.
//!
//! This module defines the signals that steer an instruction through the datapath. It provides:
//! 1. **Operation Selection:** The ALU operation class chosen by the control unit and the
//!    concrete ALU operation chosen by ALU control.
//! 2. **Operand and Result Routing:** Mux select lines for the ALU B operand and the write-back value.
//! 3. **Memory and Register Enables:** Read/write enables for data memory and the register file.

use std::fmt;

/// ALU operation selected by ALU control.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AluOp {
    /// Integer addition (wrapping).
    #[default]
    Add,

    /// Integer subtraction (wrapping).
    Sub,

    /// Bitwise AND.
    And,

    /// Bitwise OR.
    Or,

    /// Bitwise XOR.
    Xor,

    /// Shift left logical.
    Sll,

    /// Shift right logical.
    Srl,

    /// Shift right arithmetic.
    Sra,

    /// Set less than (signed).
    Slt,

    /// Set less than unsigned.
    Sltu,
}

/// ALU operation class emitted by the control unit.
///
/// ALU control combines it with `funct3`/`funct7` to pick an [`AluOp`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AluOpClass {
    /// Address computation for loads and stores; always `Add`.
    #[default]
    LoadStore,

    /// Equality test for branches; always `Sub`.
    Branch,

    /// R-type arithmetic; `funct3` and `funct7` select the operation.
    RegReg,

    /// I-type arithmetic; `funct3` selects the operation.
    RegImm,
}

/// Control signals for one datapath cycle.
///
/// Recomputed from the opcode every cycle; nothing carries over.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlSignals {
    /// ALU B operand source: `true` selects the immediate, `false` selects `rs2`.
    pub alu_src: bool,
    /// Write-back source: `true` selects data memory, `false` selects the ALU result.
    pub mem_to_reg: bool,
    /// Enable write to the destination register.
    pub reg_write: bool,
    /// Enable data memory read (load).
    pub mem_read: bool,
    /// Enable data memory write (store).
    pub mem_write: bool,
    /// Instruction is a conditional branch.
    pub branch: bool,
    /// ALU operation class.
    pub alu_op: AluOpClass,
}

impl fmt::Display for ControlSignals {
    /// Renders the signals as a diagram of the control unit's output lines.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "           |Branch------{}", self.branch)?;
        writeln!(f, "           |Mem Read----{}", self.mem_read)?;
        writeln!(f, "           |Mem to Reg--{}", self.mem_to_reg)?;
        writeln!(f, "Control--->|ALU Op------{:?}", self.alu_op)?;
        writeln!(f, "           |Mem Write---{}", self.mem_write)?;
        writeln!(f, "           |ALU Src-----{}", self.alu_src)?;
        write!(f, "           |Reg Write---{}", self.reg_write)
    }
}
