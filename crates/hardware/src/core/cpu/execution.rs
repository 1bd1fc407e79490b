//! Main Execution Cycle.
//!
//! This module implements the single clock cycle of the datapath. It performs the following:
//! 1. **Fetch:** Reads the instruction at PC; a miss halts the machine.
//! 2. **Decode:** Extracts fields, control signals, immediate and ALU operation, and
//!    validates the instruction before any state changes.
//! 3. **Execute:** Selects ALU operand B and computes the result and zero flag.
//! 4. **Memory:** Stores `rs2` or loads a word at the ALU result.
//! 5. **Write-back and PC update:** Routes the result to `rd` and picks the next PC.
//! 6. **Observability:** Logs disassembly and the control diagram when tracing.

use tracing::{debug, info, trace, warn};

use super::{Cpu, RunState};
use crate::common::constants::INSTRUCTION_BYTES;
use crate::common::error::{DecodeError, ExecError, StepError};
use crate::core::signals::{AluOp, ControlSignals};
use crate::core::units::alu::Alu;
use crate::core::units::control::ControlUnit;
use crate::core::units::imm_gen;
use crate::core::units::mux::Mux2;
use crate::isa::decode::{self, Decoded, InstructionClass};
use crate::isa::disasm::disassemble;
use crate::isa::instruction::Instruction;
use crate::isa::rv32i::funct3;

/// Everything decode produces for one instruction.
#[derive(Clone, Copy, Debug)]
struct DecodeOut {
    fields: Decoded,
    class: InstructionClass,
    signals: ControlSignals,
    alu_op: AluOp,
    imm: i32,
}

impl Cpu {
    /// Executes one clock cycle.
    ///
    /// # Returns
    ///
    /// `Ok(true)` if an instruction was executed and the machine keeps
    /// running, `Ok(false)` if the machine is halted (no instruction at PC,
    /// or already halted or faulted).
    ///
    /// # Errors
    ///
    /// A `StepError` carrying the faulting PC if the instruction is
    /// unsupported or its memory access is invalid. The register file, data
    /// memory and PC are left as they were, and the machine is `Faulted`.
    pub fn step(&mut self) -> Result<bool, StepError> {
        if self.state != RunState::Running {
            return Ok(false);
        }
        self.stats.cycles += 1;

        let pc = self.pc;
        let Some(inst) = self.imem.get(pc) else {
            self.state = RunState::Halted;
            info!("[CPU] No instruction at {:#010x}, halting", pc);
            return Ok(false);
        };

        match self.execute(inst) {
            Ok(()) => Ok(true),
            Err(source) => {
                self.state = RunState::Faulted;
                warn!(
                    "[CPU] Fault at {:#010x} ({}): {}",
                    pc,
                    disassemble(inst.raw()),
                    source
                );
                Err(StepError { pc, source })
            }
        }
    }

    /// Runs `inst` through every stage after fetch.
    fn execute(&mut self, inst: Instruction) -> Result<(), ExecError> {
        let mut control = self.control;
        let d = Self::decode_stage(inst, &mut control)?;
        let (rs1_val, rs2_val) = self.regs.read_ports(d.fields.rs1, d.fields.rs2)?;

        if self.trace {
            debug!(
                "[CPU] {:#010x}: {}  {}",
                self.pc,
                inst,
                disassemble(d.fields.raw)
            );
            debug!("[CPU] Control signals:\n{}", d.signals);
        }

        let alu_b = Mux2::select(rs2_val, d.imm, d.signals.alu_src);
        let (alu_result, zero) = Alu::execute(rs1_val, alu_b, d.alu_op);

        // Addresses are the ALU result reinterpreted as unsigned.
        let addr = alu_result as u32;
        let mem_data = if d.signals.mem_write {
            self.dmem.write(addr, rs2_val)?;
            0
        } else if d.signals.mem_read {
            self.dmem.read(addr)?
        } else {
            0
        };

        let wb = Mux2::select(alu_result, mem_data, d.signals.mem_to_reg);
        if d.signals.reg_write {
            self.regs.write(d.fields.rd, wb)?;
        }

        let taken = d.signals.branch && zero;
        let next_pc = Mux2::new(
            self.pc.wrapping_add(INSTRUCTION_BYTES),
            self.pc.wrapping_add(d.imm as u32),
        );
        self.pc = next_pc.output(taken);
        self.control = control;

        if self.trace {
            debug!(
                "[CPU] alu={} zero={} mem={} wb={} next_pc={:#010x}",
                alu_result, zero, mem_data, wb, self.pc
            );
        }
        trace!("[CPU] x{} <- {}", d.fields.rd, wb);

        self.retire(d.class, taken);
        Ok(())
    }

    /// Decodes an instruction without touching architectural state.
    ///
    /// `control` is a copy of the control unit; it is committed only once
    /// the whole cycle succeeds.
    fn decode_stage(
        inst: Instruction,
        control: &mut ControlUnit,
    ) -> Result<DecodeOut, DecodeError> {
        let fields = decode::decode(inst);
        let class = InstructionClass::from_opcode(fields.opcode)?;
        let signals = control.decode(fields.opcode)?;
        check_width(class, &fields)?;
        let alu_op = Alu::control(signals.alu_op, fields.funct3, fields.funct7)?;
        let imm = class
            .imm_format()
            .map_or(0, |format| imm_gen::generate(fields.raw, format));

        Ok(DecodeOut {
            fields,
            class,
            signals,
            alu_op,
            imm,
        })
    }

    /// Updates the instruction mix counters for a completed instruction.
    fn retire(&mut self, class: InstructionClass, taken: bool) {
        self.stats.instructions_retired += 1;
        match class {
            InstructionClass::RegReg | InstructionClass::RegImm => self.stats.inst_alu += 1,
            InstructionClass::Load => self.stats.inst_load += 1,
            InstructionClass::Store => self.stats.inst_store += 1,
            InstructionClass::Branch => {
                self.stats.inst_branch += 1;
                if taken {
                    self.stats.branches_taken += 1;
                }
            }
        }
    }
}

/// Loads and stores move whole words only; BEQ is the only branch.
fn check_width(class: InstructionClass, fields: &Decoded) -> Result<(), DecodeError> {
    let supported = match class {
        InstructionClass::Load => fields.funct3 == funct3::LW,
        InstructionClass::Store => fields.funct3 == funct3::SW,
        InstructionClass::Branch => fields.funct3 == funct3::BEQ,
        InstructionClass::RegReg | InstructionClass::RegImm => true,
    };
    if supported {
        Ok(())
    } else {
        Err(DecodeError::UnsupportedFunction {
            opcode: fields.opcode,
            funct3: fields.funct3,
            funct7: fields.funct7,
        })
    }
}
