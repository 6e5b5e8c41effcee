//! Core processor implementation.
//!
//! This module contains the architectural CPU state, the instruction executor, and
//! the functional units it delegates to.

/// CPU core implementation and execution.
pub mod cpu;

/// Execution units (ALU).
pub mod units;

pub use self::cpu::Cpu;
pub use self::cpu::execution::execute;
