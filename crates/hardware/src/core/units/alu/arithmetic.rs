//! ALU arithmetic operations.
//!
//! Implements 32-bit wrapping addition and subtraction. Overflow wraps in
//! two's complement, matching the register width.

/// `a + b`, wrapping on overflow.
pub const fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// `a - b`, wrapping on overflow.
pub const fn sub(a: i32, b: i32) -> i32 {
    a.wrapping_sub(b)
}
