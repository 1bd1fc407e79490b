//! Instruction Memory.
//!
//! An ordered, read-only map from word-aligned byte address to instruction
//! word. It is built once by the loader; a lookup miss at the current PC is
//! how the datapath learns that the program has ended.

use std::collections::BTreeMap;

use crate::common::constants::INSTRUCTION_BYTES;
use crate::isa::instruction::Instruction;

/// Program memory addressed by byte offset.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InstructionMemory {
    words: BTreeMap<u32, Instruction>,
}

impl InstructionMemory {
    /// Creates an empty instruction memory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lays out `words` at addresses 0, 4, 8, ... in order.
    pub fn from_words<I>(words: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Instruction>,
    {
        let words = (0u32..)
            .map(|i| i * INSTRUCTION_BYTES)
            .zip(words.into_iter().map(Into::into))
            .collect();
        Self { words }
    }

    /// Appends `inst` at the next free address and returns that address.
    pub fn push(&mut self, inst: Instruction) -> u32 {
        let addr = self
            .words
            .last_key_value()
            .map_or(0, |(last, _)| last + INSTRUCTION_BYTES);
        let _ = self.words.insert(addr, inst);
        addr
    }

    /// Instruction at `addr`, if any.
    pub fn get(&self, addr: u32) -> Option<Instruction> {
        self.words.get(&addr).copied()
    }

    /// Number of instructions.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if no instructions are loaded.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates `(address, instruction)` pairs in address order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, Instruction)> + '_ {
        self.words.iter().map(|(a, i)| (*a, *i))
    }
}
