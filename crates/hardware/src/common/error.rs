//! Fault definitions.
//!
//! Every fault is local to a single instruction. The executor detects the fault
//! before it mutates any register, the program counter or memory, so a failed
//! instruction leaves the machine exactly as it found it.

use thiserror::Error;

/// Fatal conditions raised while decoding or executing one instruction word.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ExecError {
    /// The opcode field (bits 1-4) holds a value outside 0-14.
    #[error("invalid opcode {opcode} in word {word:#010x}")]
    InvalidOpcode {
        /// The offending opcode value.
        opcode: u32,
        /// The full instruction word.
        word: u32,
    },

    /// A load or store carries the reserved byte-width selector 3.
    #[error("invalid byte-width selector {selector} in word {word:#010x}")]
    InvalidByteWidth {
        /// The offending selector value.
        selector: u32,
        /// The full instruction word.
        word: u32,
    },

    /// DIV or MOD with a zero divisor.
    #[error("{op} by zero")]
    DivisionByZero {
        /// Mnemonic of the faulting operation.
        op: &'static str,
    },

    /// A register-indirect offset field names a register past r7.
    #[error("register index {0} out of range (r0-r7)")]
    RegisterIndexOutOfRange(u32),

    /// A load or store touches bytes past the end of memory.
    #[error("memory access of {len} bytes at {addr:#x} exceeds memory size {size:#x}")]
    MemoryOutOfBounds {
        /// First byte of the access.
        addr: u64,
        /// Number of bytes accessed.
        len: usize,
        /// Size of the memory that was accessed.
        size: usize,
    },
}

/// A bit range that cannot be turned into a 32-bit mask.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("invalid bit range {start}..={end} (bits are numbered 1-32)")]
pub struct BitRangeError {
    /// Requested first bit.
    pub start: u32,
    /// Requested last bit.
    pub end: u32,
}
