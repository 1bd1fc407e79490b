//! Program Image Loader.
//!
//! This module turns a textual program image into instruction memory. It performs:
//! 1. **Reading:** Loads the image from disk, rejecting an empty path up front.
//! 2. **Parsing:** Accepts one 32-digit binary word per line, most significant bit first.
//! 3. **Layout:** Assigns addresses 0, 4, 8, ... in file order; blank lines take no address.
//!
//! Any malformed line fails the whole load, so execution never starts from a
//! partially populated instruction memory.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::common::error::LoadError;
use crate::isa::instruction::Instruction;
use crate::soc::imem::InstructionMemory;

/// Loads a program image from disk.
///
/// # Arguments
///
/// * `path` - Path to the text image.
///
/// # Errors
///
/// `LoadError::EmptyPath` if `path` is empty, `LoadError::Io` if the file
/// cannot be read, `LoadError::InvalidInstruction` for the first malformed line.
pub fn load(path: impl AsRef<Path>) -> Result<InstructionMemory, LoadError> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Err(LoadError::EmptyPath);
    }

    debug!("Loading memory from {}", path.display());
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let imem = parse(&text)?;
    info!(
        "Loaded {} instructions from {}",
        imem.len(),
        path.display()
    );
    Ok(imem)
}

/// Parses program image text.
///
/// Trailing whitespace (including `\r`) is ignored; lines that are empty
/// after trimming are skipped without consuming an address.
///
/// # Errors
///
/// `LoadError::InvalidInstruction` with the one-based line number of the
/// first line that is not exactly 32 binary digits.
pub fn parse(text: &str) -> Result<InstructionMemory, LoadError> {
    let mut imem = InstructionMemory::new();
    for (idx, line) in text.lines().enumerate() {
        let word = line.trim_end();
        if word.is_empty() {
            continue;
        }
        let inst = word
            .parse::<Instruction>()
            .map_err(|source| LoadError::InvalidInstruction {
                line: idx + 1,
                source,
            })?;
        let _ = imem.push(inst);
    }
    Ok(imem)
}
