//! File-backed data memory.
//!
//! The file is created (or truncated) once when the store is constructed,
//! sized to the memory extent, and kept open for the lifetime of the store.
//! It is closed when the store is dropped. Its contents after a run are the
//! program's observable memory state.

use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use crate::soc::traits::Storage;

/// Backing store kept in a host file.
#[derive(Debug)]
pub struct FileStorage {
    file: File,
    path: PathBuf,
    size: usize,
}

impl FileStorage {
    /// Opens `path` fresh (truncating any previous contents) and zero-fills
    /// it to `size` bytes.
    ///
    /// # Errors
    ///
    /// Any I/O error from creating or sizing the file.
    pub fn create(path: impl AsRef<Path>, size: usize) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)?;
        file.set_len(size as u64)?;
        Ok(Self { file, path, size })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for FileStorage {
    fn name(&self) -> String {
        format!("file:{}", self.path.display())
    }

    fn len(&self) -> usize {
        self.size
    }

    fn read_bytes(&self, offset: usize, buf: &mut [u8]) -> io::Result<()> {
        let mut file = &self.file;
        let _ = file.seek(SeekFrom::Start(offset as u64))?;
        file.read_exact(buf)
    }

    fn write_bytes(&mut self, offset: usize, data: &[u8]) -> io::Result<()> {
        let _ = self.file.seek(SeekFrom::Start(offset as u64))?;
        self.file.write_all(data)?;
        self.file.flush()
    }

    fn contents(&self) -> io::Result<Vec<u8>> {
        let mut file = &self.file;
        let _ = file.seek(SeekFrom::Start(0))?;
        let mut data = Vec::with_capacity(self.size);
        let _ = file.read_to_end(&mut data)?;
        Ok(data)
    }
}
