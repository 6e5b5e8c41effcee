//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the opcode table, the field layout of each instruction shape, and the
//! decode, encode and disassembly logic.
//!
//! # Instruction shapes
//!
//! * `JMP`: conditional or unconditional control transfer.
//! * `LD` / `PUT`: big-endian 1, 2 or 4 byte memory transfers.
//! * `SET` / `SETU`: immediate loads into the low 24 and high 7 bits.
//! * `ADD` .. `XOR`: three-register-plus-immediate arithmetic and bitwise operations.
//! * `BSR` / `BSL`: shifts and rotates by a 5-bit amount.

/// Instruction word decoding.
pub mod decode;

/// Instruction disassembler for tracing and diagnostics.
pub mod disasm;

/// Instruction word encoding.
pub mod encode;

/// Field layouts and the decoded instruction model.
pub mod instruction;

/// Opcode values.
pub mod opcodes;

pub use decode::decode;
pub use disasm::disassemble;
pub use instruction::{AluOp, Instruction, Operand, ShiftDir, Width};
