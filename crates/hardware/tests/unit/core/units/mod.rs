//! # Functional Unit Tests


/// Main control unit table.
pub mod control;

/// Immediate generator.
pub mod imm_gen;
