//! Immediate Generator.
//!
//! Extracts the immediate field of an instruction word and sign-extends it to
//! 32 bits. Three encodings are supported:
//! 1. **I-Type:** `imm[11:0]` in bits 31-20 (arithmetic immediates and loads).
//! 2. **S-Type:** `imm[11:5]` in bits 31-25 and `imm[4:0]` in bits 11-7 (stores).
//! 3. **B-Type:** `imm[12|10:5]` in bits 31-25 and `imm[4:1|11]` in bits 11-7
//!    (branches). Bit 0 is always zero, so branch offsets are even.

/// Total width of a RISC-V instruction in bits.
const INSTRUCTION_WIDTH: u32 = 32;

/// Bit shift for extracting I-Type immediate field (bits 20-31).
const I_IMM_SHIFT: u32 = 20;

/// Total number of bits in I-Type immediate (12 bits).
const I_IMM_BITS: u32 = 12;

/// Bit shift for extracting S-Type immediate low field (bits 7-11).
const S_IMM_LOW_SHIFT: u32 = 7;

/// Bit mask for S-Type immediate low field (5 bits: imm[4:0]).
const S_IMM_LOW_MASK: u32 = 0x1F;

/// Bit shift for extracting S-Type immediate high field (bits 25-31).
const S_IMM_HIGH_SHIFT: u32 = 25;

/// Bit mask for S-Type immediate high field (7 bits: imm[11:5]).
const S_IMM_HIGH_MASK: u32 = 0x7F;

/// Bit shift for combining S-Type immediate fields after extraction.
const S_IMM_COMBINED_SHIFT: u32 = 5;

/// Total number of bits in S-Type immediate (12 bits).
const S_IMM_BITS: u32 = 12;

/// Bit shift for extracting B-Type immediate bit 11 (bit 7 of instruction).
const B_IMM_11_SHIFT: u32 = 7;

/// Bit shift for extracting B-Type immediate bits 4-1 (bits 8-11 of instruction).
const B_IMM_4_1_SHIFT: u32 = 8;

/// Bit mask for B-Type immediate bits 4-1 (4 bits).
const B_IMM_4_1_MASK: u32 = 0xF;

/// Bit shift for extracting B-Type immediate bits 10-5 (bits 25-30 of instruction).
const B_IMM_10_5_SHIFT: u32 = 25;

/// Bit mask for B-Type immediate bits 10-5 (6 bits).
const B_IMM_10_5_MASK: u32 = 0x3F;

/// Bit shift for extracting B-Type immediate bit 12 (bit 31 of instruction).
const B_IMM_12_SHIFT: u32 = 31;

/// Total number of bits in B-Type immediate (13 bits, sign-extended).
const B_IMM_BITS: u32 = 13;

/// Immediate encodings understood by the generator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImmFormat {
    /// `imm[11:0]` (ADDI, LW, ...).
    I,
    /// `imm[11:5] | imm[4:0]` (SW).
    S,
    /// `imm[12|10:5] | imm[4:1|11]`, low bit forced to zero (BEQ).
    B,
}

/// Produces the sign-extended immediate of `inst` for the given encoding.
///
/// # Examples
///
/// ```
/// use rv32sc_core::core::units::imm_gen::{ImmFormat, generate};
///
/// // addi x1, x0, -1
/// assert_eq!(generate(0xFFF0_0093, ImmFormat::I), -1);
/// // beq x0, x0, +8
/// assert_eq!(generate(0x0000_0463, ImmFormat::B), 8);
/// ```
pub fn generate(inst: u32, format: ImmFormat) -> i32 {
    match format {
        ImmFormat::I => sign_extend(inst >> I_IMM_SHIFT, I_IMM_BITS),
        ImmFormat::S => {
            let low = (inst >> S_IMM_LOW_SHIFT) & S_IMM_LOW_MASK;
            let high = (inst >> S_IMM_HIGH_SHIFT) & S_IMM_HIGH_MASK;
            sign_extend((high << S_IMM_COMBINED_SHIFT) | low, S_IMM_BITS)
        }
        ImmFormat::B => {
            let bit_11 = (inst >> B_IMM_11_SHIFT) & 1;
            let bits_4_1 = (inst >> B_IMM_4_1_SHIFT) & B_IMM_4_1_MASK;
            let bits_10_5 = (inst >> B_IMM_10_5_SHIFT) & B_IMM_10_5_MASK;
            let bit_12 = (inst >> B_IMM_12_SHIFT) & 1;

            let combined = (bit_12 << 12) | (bit_11 << 11) | (bits_10_5 << 5) | (bits_4_1 << 1);
            sign_extend(combined, B_IMM_BITS)
        }
    }
}

/// Sign extends the low `bits` of `val` to a 32-bit signed integer.
///
/// Values whose top bit is clear are zero-extended; otherwise the upper bits
/// are filled with ones, giving the two's-complement value of the field.
pub fn sign_extend(val: u32, bits: u32) -> i32 {
    let shift = INSTRUCTION_WIDTH - bits;
    ((val << shift) as i32) >> shift
}
