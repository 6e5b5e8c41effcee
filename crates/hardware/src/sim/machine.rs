//! Machine: owns the CPU, memory and disk side-by-side.
//!
//! Nothing here is global. Two machines built from the same configuration share no
//! state and can run on different threads.

use tracing::{debug, warn};

use crate::common::ExecError;
use crate::config::Config;
use crate::core::Cpu;
use crate::soc::Memory;
use crate::soc::devices::RamDisk;

/// A complete machine instance.
#[derive(Debug)]
pub struct Machine {
    /// Architectural CPU state.
    pub cpu: Cpu,
    /// Main memory.
    pub memory: Memory,
    /// Attached disk. The executor never touches it.
    pub disk: RamDisk,
    start_pc: u32,
}

impl Machine {
    /// Builds a machine from `config`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sim32_core::{Config, Machine};
    /// use sim32_core::common::Reg;
    ///
    /// let mut machine = Machine::new(&Config::default());
    /// machine.step((5 << 8) | 0x3).unwrap(); // set r0, #5
    /// assert_eq!(machine.cpu.regs.read(Reg::R0), 5);
    /// ```
    pub fn new(config: &Config) -> Self {
        debug!(
            start_pc = config.general.start_pc,
            base_addressing = ?config.memory.base_addressing,
            disk_bytes = config.disk.capacity_bytes,
            "building machine"
        );
        Self {
            cpu: Cpu::from_config(config),
            memory: Memory::new(),
            disk: RamDisk::new(config.disk.capacity_bytes),
            start_pc: config.general.start_pc,
        }
    }

    /// Executes one instruction word.
    ///
    /// # Errors
    ///
    /// Propagates the executor's fault; the machine is unchanged on error.
    pub fn step(&mut self, word: u32) -> Result<(), ExecError> {
        self.cpu.execute(word, &mut self.memory)
    }

    /// Executes `words` in order, stopping at the first fault.
    ///
    /// Returns the number of instructions executed.
    ///
    /// # Errors
    ///
    /// Returns the index of the faulting word together with its fault.
    pub fn run(&mut self, words: &[u32]) -> Result<usize, (usize, ExecError)> {
        for (i, &word) in words.iter().enumerate() {
            if let Err(e) = self.step(word) {
                warn!(index = i, word = format_args!("{word:#010x}"), "program stopped: {e}");
                return Err((i, e));
            }
        }
        Ok(words.len())
    }

    /// Zeroes registers, memory and disk, and returns the PC to its start value.
    pub fn reset(&mut self) {
        self.cpu.reset(self.start_pc);
        self.memory.clear();
        self.disk.format();
        debug!(pc = self.start_pc, "machine reset");
    }
}
