//! Simulation utilities and program loading.
//!
//! Provides the program image loader and the simulator that drives the
//! datapath clock until the program ends.

/// Program image loading.
pub mod loader;

/// Run loop, halt reasons and run summaries.
pub mod simulator;

pub use simulator::{HaltReason, RunSummary, Simulator};
