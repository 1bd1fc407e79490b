//! # Core Tests
//!
//! Tests for the register file, the combinational units, and the
//! single-cycle execution of whole instructions.


/// Execution cycle tests.
pub mod cpu;

/// Functional unit tests.
pub mod units;
