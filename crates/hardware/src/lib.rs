//! RV32I single-cycle datapath simulator library.
//!
//! This crate models the classic single-cycle RISC-V datapath with the following:
//! 1. **Core:** Register file, control unit, ALU with ALU control, immediate generator,
//!    multiplexers, and the CPU that runs one instruction per clock.
//! 2. **Memory:** Read-only instruction memory and word-addressed data memory backed
//!    by a heap buffer or a host file.
//! 3. **ISA:** Field extraction, opcode classification, and disassembly for the
//!    supported RV32I subset (R/I arithmetic, `lw`, `sw`, `beq`).
//! 4. **Simulation:** Program loader, run loop, configuration, and statistics.

/// Common types and constants (widths, error types).
pub mod common;
/// Simulator configuration (defaults, enums, config structures).
pub mod config;
/// CPU core (register file, units, signals, execution cycle).
pub mod core;
/// Instruction set (decode, instruction, ABI, disassembly, RV32I encodings).
pub mod isa;
/// Program loader and run loop.
pub mod sim;
/// Instruction and data memories.
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main CPU type; holds the register file, memories, and stats.
pub use crate::core::Cpu;
/// Top-level simulator; build with `Simulator::load` or `Simulator::from_config`.
pub use crate::sim::Simulator;
