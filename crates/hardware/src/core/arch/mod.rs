//! RISC-V architectural state.
//!
//! The single-cycle datapath exposes one piece of architectural state besides
//! the PC: the general-purpose register file.

/// General-Purpose Register file implementation.
pub mod gpr;
