//! ALU shift operations.
//!
//! Implements shift-left logical (SLL), shift-right logical (SRL), and
//! shift-right arithmetic (SRA). Shift amounts are masked to 5 bits (0-31),
//! so the upper bits of an SRAI immediate never reach the shifter.

/// Bit mask for shift amount in RV32 (5 bits: 0-31).
const SHAMT_MASK: u32 = 0x1f;

/// Lower 5 bits of the shift operand.
const fn shamt(b: i32) -> u32 {
    b as u32 & SHAMT_MASK
}

/// Shift left logical.
pub const fn sll(a: i32, b: i32) -> i32 {
    a.wrapping_shl(shamt(b))
}

/// Shift right logical; zeros enter from the top.
pub const fn srl(a: i32, b: i32) -> i32 {
    (a as u32).wrapping_shr(shamt(b)) as i32
}

/// Shift right arithmetic; the sign bit is replicated.
pub const fn sra(a: i32, b: i32) -> i32 {
    a >> shamt(b)
}
