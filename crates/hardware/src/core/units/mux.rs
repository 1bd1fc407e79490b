//! Two-input multiplexer.
//!
//! The datapath uses three of these: ALU operand B (register vs immediate),
//! write-back value (ALU vs memory) and next PC (sequential vs branch target).

/// A 2-to-1 selector holding its two buffered inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mux2<T> {
    input0: T,
    input1: T,
}

impl<T: Copy> Mux2<T> {
    /// Latches both inputs.
    pub const fn new(input0: T, input1: T) -> Self {
        Self { input0, input1 }
    }

    /// Drives the output: `input1` when `control` is high, `input0` otherwise.
    pub fn output(&self, control: bool) -> T {
        if control { self.input1 } else { self.input0 }
    }

    /// One-shot form of [`Mux2::new`] followed by [`Mux2::output`].
    pub fn select(input0: T, input1: T, control: bool) -> T {
        Self::new(input0, input1).output(control)
    }
}
