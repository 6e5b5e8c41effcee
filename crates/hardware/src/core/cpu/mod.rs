//! CPU Core Definition and Initialization.
//!
//! This module defines the `Cpu` structure, the container for the architectural
//! state the executor mutates. It coordinates the following:
//! 1. **State Management:** Holds the register file and the program counter.
//! 2. **Addressing Policy:** Records how LD/PUT interpret their base field.
//! 3. **Observability:** Carries the per-instruction register trace switch.
//!
//! The CPU owns no memory. Callers pass a [`crate::soc::Memory`] into every
//! execution, so any number of independent machines can coexist.

/// Instruction decode-and-execute.
pub mod execution;

/// Load/store address resolution and transfers.
pub mod memory;

use crate::common::RegisterFile;
use crate::config::{BaseAddressing, Config};

/// Architectural CPU state.
///
/// The program counter is never advanced implicitly; only `JMP` writes it. The
/// caller decides where the next word comes from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cpu {
    /// General-purpose registers.
    pub regs: RegisterFile,
    /// Program counter.
    pub pc: u32,
    /// How LD/PUT interpret their base field.
    pub base_addressing: BaseAddressing,
    /// Log the register file after every instruction.
    pub trace: bool,
}

impl Cpu {
    /// Creates a CPU with cleared registers and the PC at zero.
    pub const fn new() -> Self {
        Self {
            regs: RegisterFile::new(),
            pc: 0,
            base_addressing: BaseAddressing::Field,
            trace: false,
        }
    }

    /// Creates a CPU configured from `config`.
    pub const fn from_config(config: &Config) -> Self {
        Self {
            regs: RegisterFile::new(),
            pc: config.general.start_pc,
            base_addressing: config.memory.base_addressing,
            trace: config.general.trace_instructions,
        }
    }

    /// Clears every register and moves the PC to `pc`; configuration is kept.
    pub const fn reset(&mut self, pc: u32) {
        self.regs.clear();
        self.pc = pc;
    }
}
