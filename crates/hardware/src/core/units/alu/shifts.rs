//! ALU shift and rotate operations.
//!
//! The instruction encodes a 5-bit amount, but these helpers accept any `u32` and
//! never rely on the host's behavior for shifts of the full word width:
//! - rotates reduce the amount modulo 32, so 32 is a full rotation (no change);
//! - plain shifts by 32 or more clear the word.

use crate::common::constants::WORD_BITS;
use crate::isa::instruction::ShiftDir;

/// Bit mask for the rotate amount (5 bits: 0-31).
const SHAMT_MASK: u32 = WORD_BITS - 1;

/// Shifts or rotates `value` by `amount` in direction `dir`.
pub const fn execute(dir: ShiftDir, value: u32, amount: u32, rotate: bool) -> u32 {
    if rotate {
        let amount = amount & SHAMT_MASK;
        match dir {
            ShiftDir::Right => value.rotate_right(amount),
            ShiftDir::Left => value.rotate_left(amount),
        }
    } else if amount >= WORD_BITS {
        0
    } else {
        match dir {
            ShiftDir::Right => value >> amount,
            ShiftDir::Left => value << amount,
        }
    }
}
