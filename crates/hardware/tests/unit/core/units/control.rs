//! # Control Unit Tests
//!
//! The full opcode to control-signal table, and the diagram rendering used
//! in debug traces.

use pretty_assertions::assert_eq;
use rv32sc_core::common::DecodeError;
use rv32sc_core::core::signals::{AluOpClass, ControlSignals};
use rv32sc_core::core::units::control::ControlUnit;
use rv32sc_core::isa::rv32i::opcodes;

fn signals(opcode: u32) -> ControlSignals {
    ControlUnit::new().decode(opcode).unwrap()
}

#[test]
fn test_r_type_signals() {
    assert_eq!(
        signals(opcodes::OP_REG),
        ControlSignals {
            alu_src: false,
            mem_to_reg: false,
            reg_write: true,
            mem_read: false,
            mem_write: false,
            branch: false,
            alu_op: AluOpClass::RegReg,
        }
    );
}

#[test]
fn test_i_type_signals() {
    assert_eq!(
        signals(opcodes::OP_IMM),
        ControlSignals {
            alu_src: true,
            mem_to_reg: false,
            reg_write: true,
            mem_read: false,
            mem_write: false,
            branch: false,
            alu_op: AluOpClass::RegImm,
        }
    );
}

#[test]
fn test_load_signals() {
    assert_eq!(
        signals(opcodes::OP_LOAD),
        ControlSignals {
            alu_src: true,
            mem_to_reg: true,
            reg_write: true,
            mem_read: true,
            mem_write: false,
            branch: false,
            alu_op: AluOpClass::LoadStore,
        }
    );
}

#[test]
fn test_store_signals() {
    assert_eq!(
        signals(opcodes::OP_STORE),
        ControlSignals {
            alu_src: true,
            mem_to_reg: false,
            reg_write: false,
            mem_read: false,
            mem_write: true,
            branch: false,
            alu_op: AluOpClass::LoadStore,
        }
    );
}

#[test]
fn test_branch_signals() {
    assert_eq!(
        signals(opcodes::OP_BRANCH),
        ControlSignals {
            alu_src: false,
            mem_to_reg: false,
            reg_write: false,
            mem_read: false,
            mem_write: false,
            branch: true,
            alu_op: AluOpClass::Branch,
        }
    );
}

#[test]
fn test_unknown_opcode_is_rejected() {
    let mut cu = ControlUnit::new();
    assert_eq!(
        cu.decode(0b0110111),
        Err(DecodeError::UnsupportedOpcode { opcode: 0b0110111 })
    );
    assert_eq!(cu.last(), None);
}

#[test]
fn test_last_tracks_latest_decode() {
    let mut cu = ControlUnit::new();
    let _ = cu.decode(opcodes::OP_LOAD).unwrap();
    let store = cu.decode(opcodes::OP_STORE).unwrap();
    assert_eq!(cu.last(), Some(store));
}

#[test]
fn test_diagram_lists_every_line() {
    let diagram = signals(opcodes::OP_BRANCH).to_string();
    let lines: Vec<&str> = diagram.lines().collect();
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0], "           |Branch------true");
    assert_eq!(lines[3], "Control--->|ALU Op------Branch");
    assert_eq!(lines[6], "           |Reg Write---false");
}
