//! RISC-V General-Purpose Register File.
//!
//! This module implements the 32-entry integer register file of the datapath.
//! It performs the following:
//! 1. **Storage:** Maintains 32 independent 32-bit registers (`x0`-`x31`).
//! 2. **Invariant Enforcement:** `x0` reads as zero and ignores writes.
//! 3. **Ports:** Two read ports (`rs1`, `rs2`) and one write port, all bounds-checked.
//! 4. **Debugging:** A `Display` rendering of the register state with ABI names.

use std::fmt;

use tracing::debug;

use crate::common::error::RegisterError;
use crate::isa::abi;

/// Number of architectural integer registers.
pub const NUM_REGS: usize = 32;

/// General-Purpose Register file.
///
/// Register `x0` is hardwired to zero: its storage cell is never written.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [i32; NUM_REGS],
}

impl Gpr {
    /// Creates a new register file with all registers initialized to zero.
    pub const fn new() -> Self {
        Self {
            regs: [0; NUM_REGS],
        }
    }

    /// Reads a general-purpose register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Register `x0` always returns 0.
    ///
    /// # Errors
    ///
    /// `RegisterError::IndexOutOfRange` if `idx` is not a register.
    pub fn read(&self, idx: usize) -> Result<i32, RegisterError> {
        match idx {
            abi::REG_ZERO => Ok(0),
            _ => self
                .regs
                .get(idx)
                .copied()
                .ok_or(RegisterError::IndexOutOfRange(idx)),
        }
    }

    /// Reads both source operands of an instruction.
    ///
    /// The two ports may select the same register.
    ///
    /// # Errors
    ///
    /// `RegisterError::IndexOutOfRange` if either index is not a register.
    pub fn read_ports(&self, rs1: usize, rs2: usize) -> Result<(i32, i32), RegisterError> {
        Ok((self.read(rs1)?, self.read(rs2)?))
    }

    /// Writes a value to a general-purpose register.
    ///
    /// Writes to `x0` are discarded.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    /// * `val` - The 32-bit value to write.
    ///
    /// # Errors
    ///
    /// `RegisterError::IndexOutOfRange` if `idx` is not a register.
    pub fn write(&mut self, idx: usize, val: i32) -> Result<(), RegisterError> {
        if idx >= NUM_REGS {
            return Err(RegisterError::IndexOutOfRange(idx));
        }
        if idx != abi::REG_ZERO {
            self.regs[idx] = val;
        }
        Ok(())
    }

    /// Copy of all register values, `x0` first.
    pub const fn snapshot(&self) -> [i32; NUM_REGS] {
        self.regs
    }

    /// Logs every register with its ABI name at debug level.
    pub fn dump(&self) {
        for (i, val) in self.regs.iter().enumerate() {
            debug!("[Registers] x{:<2} ({:>4}) = {} ({:#010x})", i, abi::name(i), val, val);
        }
    }
}

impl fmt::Display for Gpr {
    /// Displays registers in pairs with decimal and hexadecimal values.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in (0..NUM_REGS).step_by(2) {
            let (a, b) = (self.regs[i], self.regs[i + 1]);
            writeln!(
                f,
                "x{:<2} ({:>4}) = {:>11} {:#010x}    x{:<2} ({:>4}) = {:>11} {:#010x}",
                i,
                abi::name(i),
                a,
                a,
                i + 1,
                abi::name(i + 1),
                b,
                b
            )?;
        }
        Ok(())
    }
}
