//! Instruction Encoder.
//!
//! The inverse of [`crate::isa::decode`] for every field an [`Instruction`] carries.
//! Bits an instruction ignores (the second-source field of an immediate ALU op, the
//! upper bits of `SETU` and the shifts) encode as zero, and immediates wider than
//! their field are truncated to it.

use crate::common::Field;
use crate::isa::instruction::{Instruction, OPCODE, Operand, alu, jmp, mem, set, setu, shift};

/// Places an operand into its immediate flag and offset field.
fn place_operand(operand: Operand, immediate: Field, offset: Field) -> u32 {
    match operand {
        Operand::Imm(v) => immediate.place(1) | offset.place(v),
        Operand::Reg(r) => offset.place(r.index() as u32),
    }
}

impl Instruction {
    /// Encodes this instruction into a 32-bit word.
    ///
    /// # Examples
    ///
    /// ```
    /// use sim32_core::common::Reg;
    /// use sim32_core::isa::{AluOp, Instruction, Operand, decode};
    ///
    /// let add = Instruction::Alu {
    ///     op: AluOp::Add,
    ///     dst: Reg::R0,
    ///     src1: Reg::R0,
    ///     rhs: Operand::Imm(3),
    /// };
    /// assert_eq!(decode(add.encode()), Ok(add));
    /// ```
    pub fn encode(&self) -> u32 {
        let fields = match *self {
            Self::Jmp {
                base,
                offset,
                condition,
            } => {
                let cond = condition.map_or(0, |c| {
                    jmp::CONDITIONAL.place(1) | jmp::CONDITION.place(c.index() as u32)
                });
                jmp::BASE.place(base.index() as u32)
                    | cond
                    | place_operand(offset, jmp::IMMEDIATE, jmp::OFFSET)
            }
            Self::Ld {
                width,
                dst: reg,
                base,
                offset,
            }
            | Self::Put {
                width,
                src: reg,
                base,
                offset,
            } => {
                mem::WIDTH.place(width.selector())
                    | mem::REG.place(reg.index() as u32)
                    | mem::BASE.place(base.index() as u32)
                    | place_operand(offset, mem::IMMEDIATE, mem::OFFSET)
            }
            Self::Set { dst, imm, negative } => {
                set::DST.place(dst.index() as u32)
                    | set::NEGATIVE.place(u32::from(negative))
                    | set::IMM.place(imm)
            }
            Self::Setu { dst, imm } => setu::DST.place(dst.index() as u32) | setu::IMM.place(imm),
            Self::Alu { dst, src1, rhs, .. } => {
                let rhs = match rhs {
                    Operand::Imm(v) => alu::IMMEDIATE.place(1) | alu::IMM.place(v),
                    Operand::Reg(r) => alu::SRC2.place(r.index() as u32),
                };
                alu::DST.place(dst.index() as u32) | alu::SRC1.place(src1.index() as u32) | rhs
            }
            Self::Shift {
                dst,
                src,
                amount,
                rotate,
                ..
            } => {
                shift::DST.place(dst.index() as u32)
                    | shift::SRC.place(src.index() as u32)
                    | shift::AMOUNT.place(amount)
                    | shift::ROTATE.place(u32::from(rotate))
            }
        };
        fields | OPCODE.place(self.opcode())
    }
}
