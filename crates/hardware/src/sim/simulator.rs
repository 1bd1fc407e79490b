//! Simulator: owns the CPU and drives the clock.
//!
//! The run loop steps the datapath until it halts, faults, or reaches the
//! configured cycle limit, and reports how the run ended. The limit bounds
//! executed instructions: the fetch that finds no instruction always runs,
//! so a program ending exactly at the limit reports `EndOfProgram`.

use std::path::Path;
use std::time::{Duration, Instant};

use tracing::info;

use crate::common::error::{MemoryError, SetupError, StepError};
use crate::config::Config;
use crate::core::Cpu;
use crate::core::cpu::RunState;
use crate::sim::loader;
use crate::soc::imem::InstructionMemory;
use crate::soc::memory::DataMemory;

/// Why a run stopped without faulting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HaltReason {
    /// The PC moved past the loaded program.
    EndOfProgram,
    /// The configured cycle limit was reached with instructions remaining.
    CycleLimit,
    /// The CPU had already faulted in an earlier run; nothing was executed.
    Faulted,
}

impl HaltReason {
    /// Whether the program ran to completion or was stopped by the limit.
    pub const fn is_clean(self) -> bool {
        matches!(self, Self::EndOfProgram | Self::CycleLimit)
    }
}

/// Outcome of a completed run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// How the run ended.
    pub reason: HaltReason,
    /// Clock cycles executed during this run.
    pub cycles: u64,
    /// Host time spent in the run loop.
    pub elapsed: Duration,
}

/// Top-level simulator: datapath plus run-loop settings.
#[derive(Debug)]
pub struct Simulator {
    /// The datapath being driven.
    pub cpu: Cpu,
    max_cycles: Option<u64>,
}

impl Simulator {
    /// Wraps a CPU with the run settings from `config`.
    pub fn new(mut cpu: Cpu, config: &Config) -> Self {
        cpu.trace |= config.general.trace_instructions;
        Self {
            cpu,
            max_cycles: config.general.max_cycles,
        }
    }

    /// Builds a simulator for an already loaded program.
    ///
    /// # Errors
    ///
    /// `MemoryError::Io` if the configured data memory file cannot be created.
    pub fn from_config(imem: InstructionMemory, config: &Config) -> Result<Self, MemoryError> {
        let dmem = DataMemory::from_config(&config.memory)?;
        Ok(Self::new(Cpu::new(imem, dmem), config))
    }

    /// Loads the program at `path` and builds a simulator for it.
    ///
    /// The program is loaded first, so a bad image never truncates the data
    /// memory file.
    ///
    /// # Errors
    ///
    /// `SetupError::Load` if the image is missing or malformed,
    /// `SetupError::Memory` if the data memory cannot be opened.
    pub fn load(path: impl AsRef<Path>, config: &Config) -> Result<Self, SetupError> {
        let imem = loader::load(path)?;
        Ok(Self::from_config(imem, config)?)
    }

    /// Steps the datapath until it stops.
    ///
    /// A CPU that faulted in an earlier run is not stepped again; the
    /// summary reports `HaltReason::Faulted` with zero cycles.
    ///
    /// # Errors
    ///
    /// The `StepError` of the faulting cycle. The CPU stays inspectable in
    /// its pre-fault state.
    pub fn run(&mut self) -> Result<RunSummary, StepError> {
        let start = Instant::now();
        let mut cycles = 0u64;

        let reason = loop {
            match self.cpu.state() {
                RunState::Running => {}
                RunState::Halted => break HaltReason::EndOfProgram,
                RunState::Faulted => break HaltReason::Faulted,
            }
            if self.max_cycles.is_some_and(|max| cycles >= max) && self.has_next_instruction() {
                break HaltReason::CycleLimit;
            }
            cycles += 1;
            let _ = self.cpu.step()?;
        };

        let summary = RunSummary {
            reason,
            cycles,
            elapsed: start.elapsed(),
        };
        info!(
            "[Sim] Stopped after {} cycles ({:?}) at pc {:#010x}",
            summary.cycles,
            summary.reason,
            self.cpu.pc()
        );
        self.cpu.regs().dump();
        Ok(summary)
    }

    /// Whether an instruction is loaded at the current PC.
    fn has_next_instruction(&self) -> bool {
        self.cpu.instruction_memory().get(self.cpu.pc()).is_some()
    }
}
