//! Core processor implementation.
//!
//! This module contains the single-cycle datapath: the register file, the
//! functional units, the control signals that steer them, and the CPU that
//! sequences one instruction per clock.

/// Architectural state (register file).
pub mod arch;

/// CPU core implementation and execution cycle.
pub mod cpu;

/// Control signals and ALU operation types.
pub mod signals;

/// Functional units (ALU, control unit, immediate generator, multiplexers).
pub mod units;

pub use self::cpu::Cpu;
