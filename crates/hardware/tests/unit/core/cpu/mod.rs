//! # CPU Tests


/// Faults and their effect on datapath state.
pub mod faults;
