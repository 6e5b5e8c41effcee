//! General-Purpose Register File.
//!
//! This module provides the register index type and the eight-entry register file.
//! It provides:
//! 1. **Indexing:** `Reg`, a register index that is always within r0-r7.
//! 2. **Storage:** `RegisterFile`, eight unsigned 32-bit registers, all general purpose.
//! 3. **Observability:** A `Display` rendering used by instruction tracing.

use std::fmt;

use super::constants::REGISTER_COUNT;
use super::error::ExecError;

/// Index of a general-purpose register (r0-r7).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Reg(u8);

impl Reg {
    /// Register r0.
    pub const R0: Self = Self(0);
    /// Register r1.
    pub const R1: Self = Self(1);
    /// Register r2.
    pub const R2: Self = Self(2);
    /// Register r3.
    pub const R3: Self = Self(3);
    /// Register r4.
    pub const R4: Self = Self(4);
    /// Register r5.
    pub const R5: Self = Self(5);
    /// Register r6.
    pub const R6: Self = Self(6);
    /// Register r7.
    pub const R7: Self = Self(7);

    /// Returns the register with index `idx`, or `None` if `idx > 7`.
    pub const fn new(idx: u32) -> Option<Self> {
        if (idx as usize) < REGISTER_COUNT {
            Some(Self(idx as u8))
        } else {
            None
        }
    }

    /// Builds a register from a 3-bit field value; higher bits are ignored.
    pub(crate) const fn from_field(bits: u32) -> Self {
        Self((bits & 0x7) as u8)
    }

    /// Position of this register in the register file.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterates over r0 through r7.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..REGISTER_COUNT as u8).map(Self)
    }
}

impl TryFrom<u32> for Reg {
    type Error = ExecError;

    fn try_from(idx: u32) -> Result<Self, Self::Error> {
        Self::new(idx).ok_or(ExecError::RegisterIndexOutOfRange(idx))
    }
}

impl fmt::Display for Reg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}", self.0)
    }
}

/// The general-purpose register file.
///
/// None of the registers is hardwired; r0 holds whatever was last written to it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u32; REGISTER_COUNT],
}

impl RegisterFile {
    /// Creates a register file with every register cleared.
    pub const fn new() -> Self {
        Self {
            regs: [0; REGISTER_COUNT],
        }
    }

    /// Reads a register.
    #[inline]
    pub const fn read(&self, reg: Reg) -> u32 {
        self.regs[reg.index()]
    }

    /// Writes a register.
    #[inline]
    pub const fn write(&mut self, reg: Reg, val: u32) {
        self.regs[reg.index()] = val;
    }

    /// Returns all eight register values in index order.
    pub const fn as_array(&self) -> &[u32; REGISTER_COUNT] {
        &self.regs
    }

    /// Clears every register.
    pub const fn clear(&mut self) {
        self.regs = [0; REGISTER_COUNT];
    }
}

impl From<[u32; REGISTER_COUNT]> for RegisterFile {
    fn from(regs: [u32; REGISTER_COUNT]) -> Self {
        Self { regs }
    }
}

impl fmt::Display for RegisterFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, val) in self.regs.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "r{i}={val:#010x}")?;
        }
        Ok(())
    }
}
