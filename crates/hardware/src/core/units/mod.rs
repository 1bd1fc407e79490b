//! Execution units and functional components.
//!
//! This module contains the combinational building blocks of the datapath:
//! the ALU with its ALU control, the main control unit, the immediate
//! generator and the two-input multiplexer.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;

/// Main control unit (opcode to control signals).
pub mod control;

/// Immediate generator for I, S and B formats.
pub mod imm_gen;

/// Two-input multiplexer.
pub mod mux;
