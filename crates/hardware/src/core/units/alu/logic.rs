//! ALU logical and comparison operations.
//!
//! Implements bitwise OR, AND, XOR, and set-less-than (signed and unsigned).
//! The comparisons always produce 0 or 1.

/// Bitwise OR.
pub const fn or(a: i32, b: i32) -> i32 {
    a | b
}

/// Bitwise AND.
pub const fn and(a: i32, b: i32) -> i32 {
    a & b
}

/// Bitwise XOR.
pub const fn xor(a: i32, b: i32) -> i32 {
    a ^ b
}

/// 1 if `a < b` as signed values, else 0.
pub const fn slt(a: i32, b: i32) -> i32 {
    (a < b) as i32
}

/// 1 if `a < b` when both bit patterns are read as unsigned, else 0.
pub const fn sltu(a: i32, b: i32) -> i32 {
    ((a as u32) < (b as u32)) as i32
}
