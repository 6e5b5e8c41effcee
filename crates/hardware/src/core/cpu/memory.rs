//! Load/Store Helpers.
//!
//! This module provides the interface between the CPU and main memory. It performs
//! the following:
//! 1. **Address Resolution:** Combines the base field and offset into a 64-bit address.
//! 2. **Operand Resolution:** Reads register-indirect offsets.
//!
//! The transfers themselves live on [`crate::soc::Memory`].

use super::Cpu;
use crate::common::Reg;
use crate::config::BaseAddressing;
use crate::isa::instruction::Operand;

impl Cpu {
    /// Resolves an operand to its value.
    #[inline]
    pub const fn operand(&self, operand: Operand) -> u32 {
        match operand {
            Operand::Imm(v) => v,
            Operand::Reg(r) => self.regs.read(r),
        }
    }

    /// Computes the address of a load or store.
    ///
    /// The sum is formed in 64 bits and never wraps.
    pub const fn effective_address(&self, base: Reg, offset: Operand) -> u64 {
        let base = match self.base_addressing {
            BaseAddressing::Field => base.index() as u64,
            BaseAddressing::Register => self.regs.read(base) as u64,
        };
        base + self.operand(offset) as u64
    }
}
