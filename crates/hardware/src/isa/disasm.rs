//! Instruction Disassembler.
//!
//! Converts instructions into human-readable assembly for debug tracing, logging, and
//! test diagnostics.
//!
//! # Syntax
//!
//! ```text
//! jmp r0, #0x10 if r1     ; PC = r0 + 0x10 when r1 != 0
//! ld.w r1, [b2 + r3]      ; base field 2, offset in r3
//! put.b r4, [b0 + #0x40]
//! set r0, #0x000005
//! set.n r0, #0x000001     ; top byte forced to 0xFF
//! setu r0, #0x7f
//! add r0, r1, #0x3
//! bsr.rot r2, r2, #8
//! ```

use std::fmt;

use crate::isa::decode::decode;
use crate::isa::instruction::{Instruction, Operand, Width};

/// Disassembles a raw word.
///
/// Returns `"unknown"` for words that do not decode.
///
/// # Examples
///
/// ```
/// use sim32_core::isa::disassemble;
///
/// assert_eq!(disassemble((5 << 8) | 0x3), "set r0, #0x000005");
/// assert_eq!(disassemble(0xF), "unknown");
/// ```
pub fn disassemble(word: u32) -> String {
    decode(word).map_or_else(|_| "unknown".to_string(), |inst| inst.to_string())
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Imm(v) => write!(f, "#{v:#x}"),
            Self::Reg(r) => write!(f, "{r}"),
        }
    }
}

impl Width {
    /// Mnemonic suffix (`b`, `h` or `w`).
    pub const fn suffix(self) -> char {
        match self {
            Self::Byte => 'b',
            Self::Half => 'h',
            Self::Word => 'w',
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Jmp {
                base,
                offset,
                condition,
            } => {
                write!(f, "jmp {base}, {offset}")?;
                if let Some(c) = condition {
                    write!(f, " if {c}")?;
                }
                Ok(())
            }
            Self::Ld {
                width,
                dst,
                base,
                offset,
            } => write!(f, "ld.{} {dst}, [b{} + {offset}]", width.suffix(), base.index()),
            Self::Put {
                width,
                src,
                base,
                offset,
            } => write!(f, "put.{} {src}, [b{} + {offset}]", width.suffix(), base.index()),
            Self::Set { dst, imm, negative } => {
                let mn = if *negative { "set.n" } else { "set" };
                write!(f, "{mn} {dst}, #{imm:#08x}")
            }
            Self::Setu { dst, imm } => write!(f, "setu {dst}, #{imm:#04x}"),
            Self::Alu { op, dst, src1, rhs } => {
                write!(f, "{} {dst}, {src1}, {rhs}", op.mnemonic())
            }
            Self::Shift {
                dir,
                dst,
                src,
                amount,
                rotate,
            } => {
                let suffix = if *rotate { ".rot" } else { "" };
                write!(f, "{}{suffix} {dst}, {src}, #{amount}", dir.mnemonic())
            }
        }
    }
}
