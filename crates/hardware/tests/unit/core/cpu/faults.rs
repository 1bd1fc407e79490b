//! # Fault Tests
//!
//! A faulting cycle must report the PC of the offending instruction, leave
//! the register file, data memory and PC untouched, and stop the machine.

use rv32sc_core::common::{DecodeError, ExecError, MemoryError};
use rv32sc_core::core::cpu::RunState;
use rv32sc_core::core::signals::AluOpClass;
use rv32sc_core::isa::rv32i::funct7::MULDIV;
use rv32sc_core::isa::rv32i::opcodes;

use crate::common::builder::instruction::InstructionBuilder;
use crate::common::harness::{TEST_MEMORY_SIZE, TestContext};

/// Steps once, expecting a fault, and checks nothing changed.
fn expect_fault(ctx: &mut TestContext) -> ExecError {
    let pc = ctx.cpu.pc();
    let regs = ctx.cpu.regs().snapshot();
    let mem = ctx.cpu.data_memory().dump().unwrap();

    let err = ctx.cpu.step().unwrap_err();
    assert_eq!(err.pc, pc);
    assert_eq!(ctx.cpu.pc(), pc);
    assert_eq!(ctx.cpu.regs().snapshot(), regs);
    assert_eq!(ctx.cpu.data_memory().dump().unwrap(), mem);
    assert_eq!(ctx.cpu.state(), RunState::Faulted);
    err.source
}

#[test]
fn test_unsupported_opcode_faults_distinctly_from_halt() {
    let lui = InstructionBuilder::new().opcode(0b0110111).rd(1).build();
    let mut ctx = TestContext::with_program(&[InstructionBuilder::new().addi(1, 0, 1).build(), lui]);

    assert!(ctx.step());
    let err = expect_fault(&mut ctx);
    assert!(matches!(
        err,
        ExecError::Decode(DecodeError::UnsupportedOpcode { opcode: 0b0110111 })
    ));
    assert_eq!(ctx.get_reg(1), 1);
}

#[test]
fn test_step_after_fault_is_noop() {
    let mut ctx = TestContext::with_program(&[0xFFFF_FFFF]);
    let _ = expect_fault(&mut ctx);
    assert!(!ctx.step());
    assert!(!ctx.step());
    assert_eq!(ctx.cpu.state(), RunState::Faulted);
}

#[test]
fn test_misaligned_store() {
    let mut ctx = TestContext::with_program(&[InstructionBuilder::new().sw(1, 2, 0).build()]);
    ctx.set_reg(1, 2);
    ctx.set_reg(2, -1);
    let err = expect_fault(&mut ctx);
    assert!(matches!(err, ExecError::Memory(MemoryError::Misaligned(2))));
}

#[test]
fn test_misaligned_load() {
    let mut ctx = TestContext::with_program(&[InstructionBuilder::new().lw(3, 1, 1).build()]);
    ctx.set_reg(3, 77);
    let err = expect_fault(&mut ctx);
    assert!(matches!(err, ExecError::Memory(MemoryError::Misaligned(1))));
    assert_eq!(ctx.get_reg(3), 77);
}

#[test]
fn test_load_past_end_of_memory() {
    let mut ctx = TestContext::with_program(&[InstructionBuilder::new().lw(3, 1, 0).build()]);
    ctx.set_reg(1, TEST_MEMORY_SIZE as i32);
    ctx.set_reg(3, 77);
    let err = expect_fault(&mut ctx);
    assert!(matches!(
        err,
        ExecError::Memory(MemoryError::OutOfRange { addr, size })
            if addr as usize == TEST_MEMORY_SIZE && size == TEST_MEMORY_SIZE
    ));
    assert_eq!(ctx.get_reg(3), 77);
}

#[test]
fn test_negative_address_is_out_of_range() {
    let mut ctx = TestContext::with_program(&[InstructionBuilder::new().sw(1, 2, 0).build()]);
    ctx.set_reg(1, -4);
    let err = expect_fault(&mut ctx);
    assert!(matches!(
        err,
        ExecError::Memory(MemoryError::OutOfRange { addr: 0xFFFF_FFFC, .. })
    ));
}

#[test]
fn test_byte_load_is_unsupported() {
    let lb = InstructionBuilder::new().lw(3, 0, 0).funct3(0b000).build();
    let mut ctx = TestContext::with_program(&[lb]);
    let err = expect_fault(&mut ctx);
    assert!(matches!(
        err,
        ExecError::Decode(DecodeError::UnsupportedFunction {
            opcode: opcodes::OP_LOAD,
            funct3: 0b000,
            ..
        })
    ));
}

#[test]
fn test_halfword_store_is_unsupported() {
    let sh = InstructionBuilder::new().sw(0, 0, 0).funct3(0b001).build();
    let mut ctx = TestContext::with_program(&[sh]);
    let err = expect_fault(&mut ctx);
    assert!(matches!(
        err,
        ExecError::Decode(DecodeError::UnsupportedFunction {
            opcode: opcodes::OP_STORE,
            ..
        })
    ));
}

#[test]
fn test_bne_is_unsupported() {
    let bne = InstructionBuilder::new().beq(1, 2, 8).funct3(0b001).build();
    let mut ctx = TestContext::with_program(&[bne]);
    let err = expect_fault(&mut ctx);
    assert!(matches!(
        err,
        ExecError::Decode(DecodeError::UnsupportedFunction {
            opcode: opcodes::OP_BRANCH,
            funct3: 0b001,
            ..
        })
    ));
}

#[test]
fn test_multiply_is_unsupported() {
    let mul = InstructionBuilder::new().add(3, 1, 2).funct7(MULDIV).build();
    let mut ctx = TestContext::with_program(&[mul]);
    let err = expect_fault(&mut ctx);
    assert!(matches!(
        err,
        ExecError::Decode(DecodeError::UnsupportedFunction { funct7: MULDIV, .. })
    ));
}

#[test]
fn test_fault_keeps_previous_control_signals() {
    let lb = InstructionBuilder::new().lw(3, 0, 0).funct3(0b000).build();
    let mut ctx =
        TestContext::with_program(&[InstructionBuilder::new().add(1, 0, 0).build(), lb]);
    assert!(ctx.step());
    let _ = expect_fault(&mut ctx);
    assert_eq!(
        ctx.cpu.control().last().map(|s| s.alu_op),
        Some(AluOpClass::RegReg)
    );
}

#[test]
fn test_fault_counts_cycle_but_not_instruction() {
    let mut ctx = TestContext::with_program(&[0]);
    let _ = expect_fault(&mut ctx);
    assert_eq!(ctx.cpu.stats.cycles, 1);
    assert_eq!(ctx.cpu.stats.instructions_retired, 0);
}
