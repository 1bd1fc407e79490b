//! # Memory Tests
//!
//! This module organizes tests for the instruction memory and for the data
//! memory over both of its backing stores.
