//! Main Control Unit.
//!
//! Maps the 7-bit opcode of the current instruction to the datapath control
//! signals. The mapping is a fixed table over the supported instruction
//! classes; the unit remembers the last decoded set only so that callers can
//! inspect it between cycles.

use crate::common::error::DecodeError;
use crate::core::signals::{AluOpClass, ControlSignals};
use crate::isa::decode::InstructionClass;

/// Control unit holding the most recently decoded signal set.
#[derive(Clone, Copy, Debug, Default)]
pub struct ControlUnit {
    last: Option<ControlSignals>,
}

impl ControlUnit {
    /// Creates a control unit that has not decoded anything yet.
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// Decodes an opcode into control signals and records them.
    ///
    /// # Errors
    ///
    /// `DecodeError::UnsupportedOpcode` if the opcode is outside the subset.
    pub fn decode(&mut self, opcode: u32) -> Result<ControlSignals, DecodeError> {
        let class = InstructionClass::from_opcode(opcode)?;
        let signals = signals_for(class);
        self.last = Some(signals);
        Ok(signals)
    }

    /// Signals produced by the last successful decode.
    pub const fn last(&self) -> Option<ControlSignals> {
        self.last
    }
}

/// Control table row for an instruction class.
pub const fn signals_for(class: InstructionClass) -> ControlSignals {
    match class {
        InstructionClass::RegReg => ControlSignals {
            alu_src: false,
            mem_to_reg: false,
            reg_write: true,
            mem_read: false,
            mem_write: false,
            branch: false,
            alu_op: AluOpClass::RegReg,
        },
        InstructionClass::RegImm => ControlSignals {
            alu_src: true,
            mem_to_reg: false,
            reg_write: true,
            mem_read: false,
            mem_write: false,
            branch: false,
            alu_op: AluOpClass::RegImm,
        },
        InstructionClass::Load => ControlSignals {
            alu_src: true,
            mem_to_reg: true,
            reg_write: true,
            mem_read: true,
            mem_write: false,
            branch: false,
            alu_op: AluOpClass::LoadStore,
        },
        InstructionClass::Store => ControlSignals {
            alu_src: true,
            mem_to_reg: false,
            reg_write: false,
            mem_read: false,
            mem_write: true,
            branch: false,
            alu_op: AluOpClass::LoadStore,
        },
        InstructionClass::Branch => ControlSignals {
            alu_src: false,
            mem_to_reg: false,
            reg_write: false,
            mem_read: false,
            mem_write: false,
            branch: true,
            alu_op: AluOpClass::Branch,
        },
    }
}
