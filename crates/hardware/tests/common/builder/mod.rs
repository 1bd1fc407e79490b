//! # Builders
//!
//! Fluent constructors for test inputs.
