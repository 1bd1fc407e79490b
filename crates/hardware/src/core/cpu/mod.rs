//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which owns the entire
//! datapath state. It coordinates the following:
//! 1. **State Management:** Maintains the register file, program counter, and run state.
//! 2. **Memories:** Owns the read-only instruction memory and the data memory.
//! 3. **Control:** Holds the control unit whose last signals stay inspectable between cycles.
//! 4. **Statistics:** Counts cycles and retired instructions by class.

/// Single-cycle execution of one instruction.
pub mod execution;

use crate::core::arch::gpr::Gpr;
use crate::core::units::control::ControlUnit;
use crate::soc::imem::InstructionMemory;
use crate::soc::memory::DataMemory;
use crate::stats::SimStats;

/// Lifecycle of the datapath.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RunState {
    /// Instructions remain to be fetched.
    #[default]
    Running,
    /// The PC left the loaded program; the run ended normally.
    Halted,
    /// An instruction could not be executed; the run ended abnormally.
    Faulted,
}

/// Single-cycle RV32I datapath.
///
/// Every call to [`Cpu::step`] runs exactly one instruction through fetch,
/// decode, execute, memory, write-back and PC update. A cycle that fails
/// leaves registers, data memory and PC as they were before it.
#[derive(Debug)]
pub struct Cpu {
    pc: u32,
    regs: Gpr,
    imem: InstructionMemory,
    dmem: DataMemory,
    control: ControlUnit,
    state: RunState,
    /// Log every cycle's instruction, control signals and results at debug level.
    pub trace: bool,
    /// Performance statistics.
    pub stats: SimStats,
}

impl Cpu {
    /// Creates a datapath at PC 0 with zeroed registers.
    ///
    /// # Arguments
    ///
    /// * `imem` - The loaded program.
    /// * `dmem` - Data memory, already opened on its backing store.
    pub fn new(imem: InstructionMemory, dmem: DataMemory) -> Self {
        Self {
            pc: 0,
            regs: Gpr::new(),
            imem,
            dmem,
            control: ControlUnit::new(),
            state: RunState::Running,
            trace: false,
            stats: SimStats::default(),
        }
    }

    /// Address of the next instruction.
    pub const fn pc(&self) -> u32 {
        self.pc
    }

    /// The register file.
    pub const fn regs(&self) -> &Gpr {
        &self.regs
    }

    /// Mutable register file, for seeding operands before a run.
    pub fn regs_mut(&mut self) -> &mut Gpr {
        &mut self.regs
    }

    /// The loaded program.
    pub const fn instruction_memory(&self) -> &InstructionMemory {
        &self.imem
    }

    /// The data memory.
    pub const fn data_memory(&self) -> &DataMemory {
        &self.dmem
    }

    /// Mutable data memory, for preloading contents before a run.
    pub fn data_memory_mut(&mut self) -> &mut DataMemory {
        &mut self.dmem
    }

    /// The control unit and its last decoded signals.
    pub const fn control(&self) -> &ControlUnit {
        &self.control
    }

    /// Current run state.
    pub const fn state(&self) -> RunState {
        self.state
    }
}
