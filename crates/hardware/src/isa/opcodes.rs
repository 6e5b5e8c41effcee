//! Opcode values (bits 1-4 of every instruction word).

/// Jump, optionally conditional on a register.
pub const OP_JMP: u32 = 0x0;
/// Load 1, 2 or 4 bytes from memory.
pub const OP_LD: u32 = 0x1;
/// Store 1, 2 or 4 bytes to memory.
pub const OP_PUT: u32 = 0x2;
/// Set a register to a 24-bit immediate, optionally sign-extended.
pub const OP_SET: u32 = 0x3;
/// Set bits 25-31 of a register, clearing bit 32.
pub const OP_SETU: u32 = 0x4;
/// Wrapping addition.
pub const OP_ADD: u32 = 0x5;
/// Wrapping subtraction.
pub const OP_SUB: u32 = 0x6;
/// Wrapping multiplication.
pub const OP_MUL: u32 = 0x7;
/// Unsigned truncating division.
pub const OP_DIV: u32 = 0x8;
/// Unsigned remainder.
pub const OP_MOD: u32 = 0x9;
/// Bitwise AND.
pub const OP_AND: u32 = 0xA;
/// Bitwise OR.
pub const OP_OR: u32 = 0xB;
/// Bitwise XOR.
pub const OP_XOR: u32 = 0xC;
/// Shift or rotate right.
pub const OP_BSR: u32 = 0xD;
/// Shift or rotate left.
pub const OP_BSL: u32 = 0xE;
