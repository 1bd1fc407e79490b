//! # Immediate Generator Tests
//!
//! Sign extension of I, S and B immediates. Encodings come from the
//! instruction builder, so each case checks that the generator recovers the
//! value that was encoded.

use proptest::prelude::*;
use rstest::rstest;
use rv32sc_core::core::units::imm_gen::{ImmFormat, generate, sign_extend};

use crate::common::builder::instruction::InstructionBuilder;

#[rstest]
#[case(0b0111_1111_1111, 12, 2047)]
#[case(0b1000_0000_0000, 12, -2048)]
#[case(0b1111_1111_1111, 12, -1)]
#[case(0, 12, 0)]
#[case(0b1_0000_0000_0000, 13, -4096)]
fn test_sign_extend(#[case] val: u32, #[case] bits: u32, #[case] expected: i32) {
    assert_eq!(sign_extend(val, bits), expected);
}

#[test]
fn test_i_immediate_ignores_register_fields() {
    let raw = InstructionBuilder::new().addi(31, 31, -5).build();
    assert_eq!(generate(raw, ImmFormat::I), -5);
}

#[test]
fn test_s_immediate_is_split_across_fields() {
    let raw = InstructionBuilder::new().sw(1, 2, 0x7E1).build();
    assert_eq!(generate(raw, ImmFormat::S), 0x7E1);
}

#[test]
fn test_b_immediate_extremes() {
    let fwd = InstructionBuilder::new().beq(0, 0, 4094).build();
    let back = InstructionBuilder::new().beq(0, 0, -4096).build();
    assert_eq!(generate(fwd, ImmFormat::B), 4094);
    assert_eq!(generate(back, ImmFormat::B), -4096);
}

proptest! {
    #[test]
    fn prop_i_immediate_round_trips(imm in -2048i32..2048) {
        let raw = InstructionBuilder::new().addi(1, 2, imm).build();
        prop_assert_eq!(generate(raw, ImmFormat::I), imm);
    }

    #[test]
    fn prop_s_immediate_round_trips(imm in -2048i32..2048) {
        let raw = InstructionBuilder::new().sw(3, 4, imm).build();
        prop_assert_eq!(generate(raw, ImmFormat::S), imm);
    }

    #[test]
    fn prop_b_immediate_is_even(raw in any::<u32>()) {
        prop_assert_eq!(generate(raw, ImmFormat::B) % 2, 0);
    }

    #[test]
    fn prop_b_immediate_round_trips(half in -2048i32..2048) {
        let imm = half * 2;
        let raw = InstructionBuilder::new().beq(5, 6, imm).build();
        prop_assert_eq!(generate(raw, ImmFormat::B), imm);
    }
}
