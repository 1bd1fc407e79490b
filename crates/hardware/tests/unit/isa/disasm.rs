//! # Disassembler Tests
//!
//! One mnemonic per supported instruction form, using ABI register names.

use rstest::rstest;
use rv32sc_core::isa::disasm::disassemble;

use crate::common::builder::instruction::InstructionBuilder;

#[rstest]
#[case(InstructionBuilder::new().add(3, 1, 2), "add gp, ra, sp")]
#[case(InstructionBuilder::new().sub(10, 11, 12), "sub a0, a1, a2")]
#[case(InstructionBuilder::new().sll(5, 6, 7), "sll t0, t1, t2")]
#[case(InstructionBuilder::new().slt(8, 9, 18), "slt s0, s1, s2")]
#[case(InstructionBuilder::new().sltu(28, 29, 30), "sltu t3, t4, t5")]
#[case(InstructionBuilder::new().xor(1, 1, 1), "xor ra, ra, ra")]
#[case(InstructionBuilder::new().srl(10, 10, 0), "srl a0, a0, zero")]
#[case(InstructionBuilder::new().sra(10, 10, 31), "sra a0, a0, t6")]
#[case(InstructionBuilder::new().or(2, 3, 4), "or sp, gp, tp")]
#[case(InstructionBuilder::new().and(27, 26, 25), "and s11, s10, s9")]
#[case(InstructionBuilder::new().addi(10, 0, 10), "addi a0, zero, 10")]
#[case(InstructionBuilder::new().addi(1, 1, -2048), "addi ra, ra, -2048")]
#[case(InstructionBuilder::new().slti(5, 6, -1), "slti t0, t1, -1")]
#[case(InstructionBuilder::new().sltiu(5, 6, 1), "sltiu t0, t1, 1")]
#[case(InstructionBuilder::new().xori(5, 6, 255), "xori t0, t1, 255")]
#[case(InstructionBuilder::new().ori(5, 6, 2047), "ori t0, t1, 2047")]
#[case(InstructionBuilder::new().andi(5, 6, 15), "andi t0, t1, 15")]
#[case(InstructionBuilder::new().slli(5, 6, 3), "slli t0, t1, 3")]
#[case(InstructionBuilder::new().srli(5, 6, 31), "srli t0, t1, 31")]
#[case(InstructionBuilder::new().srai(5, 6, 4), "srai t0, t1, 4")]
#[case(InstructionBuilder::new().lw(10, 2, 8), "lw a0, 8(sp)")]
#[case(InstructionBuilder::new().sw(2, 10, -4), "sw a0, -4(sp)")]
#[case(InstructionBuilder::new().beq(1, 2, -8), "beq ra, sp, -8")]
fn test_supported_forms(#[case] builder: InstructionBuilder, #[case] expected: &str) {
    assert_eq!(disassemble(builder.build()), expected);
}

#[rstest]
#[case::lui(0x0000_12B7)]
#[case::jal(0x0000_006F)]
#[case::lb(InstructionBuilder::new().lw(1, 2, 0).funct3(0b000).build())]
#[case::sh(InstructionBuilder::new().sw(1, 2, 0).funct3(0b001).build())]
#[case::bne(InstructionBuilder::new().beq(1, 2, 8).funct3(0b001).build())]
#[case::mul(InstructionBuilder::new().add(1, 2, 3).funct7(1).build())]
fn test_unsupported_forms_render_unknown(#[case] raw: u32) {
    assert_eq!(disassemble(raw), "unknown");
}
