//! Instruction Decoder.
//!
//! Turns a raw 32-bit word into an [`Instruction`]. Decoding is a pure function of the
//! word: it reads no machine state, and it rejects every word that cannot be executed
//! on any machine state (unassigned opcode, reserved byte width, register-indirect
//! offsets naming a register past r7).

use crate::common::{ExecError, Field, Reg};
use crate::isa::instruction::{
    AluOp, Instruction, InstructionBits, Operand, ShiftDir, Width, alu, jmp, mem, set, setu, shift,
};
use crate::isa::opcodes;

/// Decodes an instruction word.
///
/// # Errors
///
/// * [`ExecError::InvalidOpcode`] for opcode 15.
/// * [`ExecError::InvalidByteWidth`] for a load or store with selector 3.
/// * [`ExecError::RegisterIndexOutOfRange`] when a register-indirect offset field
///   holds a value above 7.
///
/// # Examples
///
/// ```
/// use sim32_core::common::Reg;
/// use sim32_core::isa::{Instruction, decode};
///
/// // SET r0, 5
/// let word = (5 << 8) | 0x3;
/// assert_eq!(
///     decode(word),
///     Ok(Instruction::Set { dst: Reg::R0, imm: 5, negative: false })
/// );
/// ```
pub fn decode(word: u32) -> Result<Instruction, ExecError> {
    match word.opcode() {
        opcodes::OP_JMP => decode_jmp(word),
        op @ (opcodes::OP_LD | opcodes::OP_PUT) => decode_mem(word, op),
        opcodes::OP_SET => Ok(Instruction::Set {
            dst: word.reg(set::DST),
            imm: word.field(set::IMM),
            negative: word.flag(set::NEGATIVE),
        }),
        opcodes::OP_SETU => Ok(Instruction::Setu {
            dst: word.reg(setu::DST),
            imm: word.field(setu::IMM),
        }),
        opcodes::OP_BSR => Ok(decode_shift(word, ShiftDir::Right)),
        opcodes::OP_BSL => Ok(decode_shift(word, ShiftDir::Left)),
        opcode => match AluOp::from_opcode(opcode) {
            Some(op) => Ok(decode_alu(word, op)),
            None => Err(ExecError::InvalidOpcode { opcode, word }),
        },
    }
}

/// Resolves an offset field as an immediate or as a register index.
///
/// Register-indirect offsets use the whole field as the index, so any value
/// above 7 is rejected rather than masked.
fn decode_offset(word: u32, immediate: Field, offset: Field) -> Result<Operand, ExecError> {
    let raw = word.field(offset);
    if word.flag(immediate) {
        Ok(Operand::Imm(raw))
    } else {
        Reg::try_from(raw).map(Operand::Reg)
    }
}

fn decode_jmp(word: u32) -> Result<Instruction, ExecError> {
    let condition = word.flag(jmp::CONDITIONAL).then(|| word.reg(jmp::CONDITION));
    Ok(Instruction::Jmp {
        base: word.reg(jmp::BASE),
        offset: decode_offset(word, jmp::IMMEDIATE, jmp::OFFSET)?,
        condition,
    })
}

fn decode_mem(word: u32, opcode: u32) -> Result<Instruction, ExecError> {
    let selector = word.field(mem::WIDTH);
    let width =
        Width::from_selector(selector).ok_or(ExecError::InvalidByteWidth { selector, word })?;
    let reg = word.reg(mem::REG);
    let base = word.reg(mem::BASE);
    let offset = decode_offset(word, mem::IMMEDIATE, mem::OFFSET)?;

    Ok(if opcode == opcodes::OP_LD {
        Instruction::Ld {
            width,
            dst: reg,
            base,
            offset,
        }
    } else {
        Instruction::Put {
            width,
            src: reg,
            base,
            offset,
        }
    })
}

/// Shared decoder for the eight three-register-plus-immediate operations.
fn decode_alu(word: u32, op: AluOp) -> Instruction {
    let rhs = if word.flag(alu::IMMEDIATE) {
        Operand::Imm(word.field(alu::IMM))
    } else {
        Operand::Reg(word.reg(alu::SRC2))
    };
    Instruction::Alu {
        op,
        dst: word.reg(alu::DST),
        src1: word.reg(alu::SRC1),
        rhs,
    }
}

fn decode_shift(word: u32, dir: ShiftDir) -> Instruction {
    Instruction::Shift {
        dir,
        dst: word.reg(shift::DST),
        src: word.reg(shift::SRC),
        amount: word.field(shift::AMOUNT),
        rotate: word.flag(shift::ROTATE),
    }
}
