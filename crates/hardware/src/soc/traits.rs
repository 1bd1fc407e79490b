//! Backing-store trait for the data memory.
//!
//! This module defines the `Storage` trait implemented by every data memory
//! backing. It provides:
//! 1. **Identification:** `name` and `len` for diagnostics and range checks.
//! 2. **Access:** Byte-slice read/write at store-relative offsets.
//! 3. **Inspection:** A full copy of the contents for dumps after a run.
//!
//! Offsets passed to a `Storage` have already been range-checked by
//! [`DataMemory`](crate::soc::memory::DataMemory).

use std::fmt;
use std::io;

/// A fixed-size, byte-addressable backing store.
pub trait Storage: fmt::Debug {
    /// Returns a short name for this store (e.g., `"buffer"`, `"file:data_memory.bin"`).
    fn name(&self) -> String;
    /// Returns the size of the store in bytes.
    fn len(&self) -> usize;
    /// Returns `true` if the store has no capacity.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Fills `buf` from the bytes starting at `offset`.
    fn read_bytes(&self, offset: usize, buf: &mut [u8]) -> io::Result<()>;
    /// Writes `data` starting at `offset`.
    fn write_bytes(&mut self, offset: usize, data: &[u8]) -> io::Result<()>;
    /// Returns a copy of the whole store.
    fn contents(&self) -> io::Result<Vec<u8>>;
}
