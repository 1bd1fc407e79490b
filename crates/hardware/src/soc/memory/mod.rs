//! Data Memory.
//!
//! This module implements the data memory of the datapath. It provides:
//! 1. **Backings:** An in-memory buffer and a host file, both behind the [`Storage`] trait.
//! 2. **Word Access:** Aligned 4-byte little-endian reads and writes of signed values.
//! 3. **Checking:** Misaligned and out-of-range accesses are reported, never performed.
//! 4. **Inspection:** Whole-image dumps for tests and tooling after a run.

/// Heap buffer backing store.
pub mod buffer;

/// Host file backing store.
pub mod file;

use std::path::Path;

use tracing::{debug, trace};

use self::buffer::BufferStorage;
use self::file::FileStorage;
use crate::common::constants::WORD_BYTES;
use crate::common::error::MemoryError;
use crate::config::{MemoryBacking, MemoryConfig};
use crate::soc::traits::Storage;

/// Byte-addressable data memory accessed in aligned words.
#[derive(Debug)]
pub struct DataMemory {
    storage: Box<dyn Storage>,
}

impl DataMemory {
    /// Wraps an existing backing store.
    pub fn new(storage: Box<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Creates a zero-filled in-memory data memory of `size` bytes.
    pub fn in_memory(size: usize) -> Self {
        Self::new(Box::new(BufferStorage::new(size)))
    }

    /// Creates a data memory backed by `path`, truncated and sized to `size` bytes.
    ///
    /// # Errors
    ///
    /// `MemoryError::Io` if the file cannot be created.
    pub fn file_backed(path: impl AsRef<Path>, size: usize) -> Result<Self, MemoryError> {
        Ok(Self::new(Box::new(FileStorage::create(path, size)?)))
    }

    /// Builds the data memory described by the configuration.
    ///
    /// # Errors
    ///
    /// `MemoryError::Io` if a file backing cannot be created.
    pub fn from_config(config: &MemoryConfig) -> Result<Self, MemoryError> {
        let mem = match config.backing {
            MemoryBacking::Buffer => Self::in_memory(config.size_bytes),
            MemoryBacking::File => Self::file_backed(&config.path, config.size_bytes)?,
        };
        debug!(
            "[Data Memory] {} ({} bytes)",
            mem.storage.name(),
            mem.size()
        );
        Ok(mem)
    }

    /// Size of the data memory in bytes.
    pub fn size(&self) -> usize {
        self.storage.len()
    }

    /// Reads the signed word at `addr`.
    ///
    /// # Errors
    ///
    /// `Misaligned` if `addr` is not a multiple of 4, `OutOfRange` if the
    /// word extends past the end, `Io` if the backing store fails.
    pub fn read(&self, addr: u32) -> Result<i32, MemoryError> {
        let offset = self.check(addr)?;
        let mut bytes = [0u8; WORD_BYTES];
        self.storage.read_bytes(offset, &mut bytes)?;
        let value = i32::from_le_bytes(bytes);
        trace!(
            "[Data Memory] read {:#010x} -> {} ({:#010x})",
            addr, value, value
        );
        Ok(value)
    }

    /// Writes the signed word `value` at `addr`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`DataMemory::read`]. Nothing is written on error.
    pub fn write(&mut self, addr: u32, value: i32) -> Result<(), MemoryError> {
        let offset = self.check(addr)?;
        trace!(
            "[Data Memory] write {:#010x} <- {} ({:#010x})",
            addr, value, value
        );
        self.storage.write_bytes(offset, &value.to_le_bytes())?;
        Ok(())
    }

    /// Copies `bytes` into memory starting at `addr`, bypassing alignment rules.
    ///
    /// # Errors
    ///
    /// `OutOfRange` if the image does not fit.
    pub fn load_image(&mut self, addr: u32, bytes: &[u8]) -> Result<(), MemoryError> {
        let offset = addr as usize;
        if offset
            .checked_add(bytes.len())
            .is_none_or(|end| end > self.size())
        {
            return Err(MemoryError::OutOfRange {
                addr,
                size: self.size(),
            });
        }
        self.storage.write_bytes(offset, bytes)?;
        Ok(())
    }

    /// Returns the full memory image and logs it as hex.
    ///
    /// # Errors
    ///
    /// `Io` if the backing store cannot be read.
    pub fn dump(&self) -> Result<Vec<u8>, MemoryError> {
        let data = self.storage.contents()?;
        debug!("[Data Memory] Data: {}", hex_string(&data));
        Ok(data)
    }

    /// Validates a word access and returns its byte offset.
    fn check(&self, addr: u32) -> Result<usize, MemoryError> {
        if addr as usize % WORD_BYTES != 0 {
            return Err(MemoryError::Misaligned(addr));
        }
        let offset = addr as usize;
        if offset
            .checked_add(WORD_BYTES)
            .is_none_or(|end| end > self.size())
        {
            return Err(MemoryError::OutOfRange {
                addr,
                size: self.size(),
            });
        }
        Ok(offset)
    }
}

/// Lowercase hex rendering of a byte slice.
fn hex_string(data: &[u8]) -> String {
    use std::fmt::Write;

    data.iter().fold(String::with_capacity(data.len() * 2), |mut s, b| {
        let _ = write!(s, "{b:02x}");
        s
    })
}
