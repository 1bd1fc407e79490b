//! Instruction Disassembler for the supported RV32I subset.
//!
//! Converts a 32-bit instruction encoding into a human-readable mnemonic
//! string for debug tracing, program listings, and test diagnostics.
//! Encodings outside the subset render as `"unknown"`; the disassembler never
//! fails, so it can describe the instruction that caused a decode fault.
//!
//! # Usage
//!
//! ```
//! use rv32sc_core::isa::disasm::disassemble;
//! let text = disassemble(0x00A00513); // ADDI x10, x0, 10
//! assert_eq!(text, "addi a0, zero, 10");
//! ```

use crate::core::units::imm_gen::{self, ImmFormat};
use crate::isa::abi;
use crate::isa::instruction::InstructionBits;
use crate::isa::rv32i::{funct3 as i_f3, funct7 as i_f7, opcodes as i_op};

/// Disassembles a 32-bit instruction into a human-readable string.
///
/// Returns a mnemonic like `"add a0, a1, a2"` or `"unknown"` for
/// unrecognised encodings.
pub fn disassemble(inst: u32) -> String {
    let rd = abi::name(inst.rd());
    let rs1 = abi::name(inst.rs1());
    let rs2 = abi::name(inst.rs2());
    let f3 = inst.funct3();
    let f7 = inst.funct7();

    match inst.opcode() {
        i_op::OP_REG => {
            let mn = match (f3, f7) {
                (i_f3::ADD_SUB, i_f7::DEFAULT) => "add",
                (i_f3::ADD_SUB, i_f7::ALT) => "sub",
                (i_f3::SLL, i_f7::DEFAULT) => "sll",
                (i_f3::SLT, i_f7::DEFAULT) => "slt",
                (i_f3::SLTU, i_f7::DEFAULT) => "sltu",
                (i_f3::XOR, i_f7::DEFAULT) => "xor",
                (i_f3::SRL_SRA, i_f7::DEFAULT) => "srl",
                (i_f3::SRL_SRA, i_f7::ALT) => "sra",
                (i_f3::OR, i_f7::DEFAULT) => "or",
                (i_f3::AND, i_f7::DEFAULT) => "and",
                _ => return "unknown".to_string(),
            };
            format!("{mn} {rd}, {rs1}, {rs2}")
        }
        i_op::OP_IMM => {
            let imm = imm_gen::generate(inst, ImmFormat::I);
            let shamt = imm & 0x1F;
            match (f3, f7) {
                (i_f3::ADD_SUB, _) => format!("addi {rd}, {rs1}, {imm}"),
                (i_f3::SLT, _) => format!("slti {rd}, {rs1}, {imm}"),
                (i_f3::SLTU, _) => format!("sltiu {rd}, {rs1}, {imm}"),
                (i_f3::XOR, _) => format!("xori {rd}, {rs1}, {imm}"),
                (i_f3::OR, _) => format!("ori {rd}, {rs1}, {imm}"),
                (i_f3::AND, _) => format!("andi {rd}, {rs1}, {imm}"),
                (i_f3::SLL, i_f7::DEFAULT) => format!("slli {rd}, {rs1}, {shamt}"),
                (i_f3::SRL_SRA, i_f7::DEFAULT) => format!("srli {rd}, {rs1}, {shamt}"),
                (i_f3::SRL_SRA, i_f7::ALT) => format!("srai {rd}, {rs1}, {shamt}"),
                _ => "unknown".to_string(),
            }
        }
        i_op::OP_LOAD if f3 == i_f3::LW => {
            let imm = imm_gen::generate(inst, ImmFormat::I);
            format!("lw {rd}, {imm}({rs1})")
        }
        i_op::OP_STORE if f3 == i_f3::SW => {
            let imm = imm_gen::generate(inst, ImmFormat::S);
            format!("sw {rs2}, {imm}({rs1})")
        }
        i_op::OP_BRANCH if f3 == i_f3::BEQ => {
            let imm = imm_gen::generate(inst, ImmFormat::B);
            format!("beq {rs1}, {rs2}, {imm}")
        }
        _ => "unknown".to_string(),
    }
}
