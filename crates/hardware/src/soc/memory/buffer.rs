//! In-memory data memory backing.
//!
//! A zero-initialised `Vec<u8>` of fixed size. Used by tests and by runs that
//! do not need the final memory image on disk.

use std::io;

use crate::soc::traits::Storage;

/// Heap buffer backing store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BufferStorage {
    data: Vec<u8>,
}

impl BufferStorage {
    /// Creates a zero-filled buffer of `size` bytes.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0; size],
        }
    }
}

impl Storage for BufferStorage {
    fn name(&self) -> String {
        "buffer".to_string()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn read_bytes(&self, offset: usize, buf: &mut [u8]) -> io::Result<()> {
        let src = self
            .data
            .get(offset..offset + buf.len())
            .ok_or_else(|| io::Error::from(io::ErrorKind::UnexpectedEof))?;
        buf.copy_from_slice(src);
        Ok(())
    }

    fn write_bytes(&mut self, offset: usize, data: &[u8]) -> io::Result<()> {
        let dst = self
            .data
            .get_mut(offset..offset + data.len())
            .ok_or_else(|| io::Error::from(io::ErrorKind::WriteZero))?;
        dst.copy_from_slice(data);
        Ok(())
    }

    fn contents(&self) -> io::Result<Vec<u8>> {
        Ok(self.data.clone())
    }
}
