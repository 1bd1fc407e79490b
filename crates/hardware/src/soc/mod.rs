//! System Components.
//!
//! This module organizes the memories around the datapath: the read-only
//! instruction memory and the data memory with its backing stores.

/// Instruction memory.
pub mod imem;

/// Data memory and its backing stores.
pub mod memory;

/// Backing store trait.
pub mod traits;
