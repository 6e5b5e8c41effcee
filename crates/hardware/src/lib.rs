//! 32-bit register machine instruction engine.
//!
//! This crate decodes and executes single 32-bit instruction words against an
//! explicit machine state:
//! 1. **ISA:** Field layouts, decoding, encoding and disassembly of the 15 opcodes.
//! 2. **Core:** Register file, program counter and the all-or-nothing executor.
//! 3. **SoC:** Fixed 1 MiB big-endian memory and a RAM-backed disk.
//! 4. **Simulation:** A `Machine` that owns one of each, built from `Config`.
//!
//! Execution never panics; every failure is reported as an [`common::ExecError`]
//! before any state changes.

/// Common types and constants (bit fields, registers, errors).
pub mod common;
/// Machine configuration (defaults, JSON loading, validation).
pub mod config;
/// CPU core (state, executor, ALU).
pub mod core;
/// Instruction set (opcodes, layouts, decode, encode, disassembly).
pub mod isa;
/// Machine harness.
pub mod sim;
/// Memory and storage devices.
pub mod soc;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// Architectural CPU state.
pub use crate::core::Cpu;
/// Free-function executor taking the machine state by reference.
pub use crate::core::execute;
/// Self-contained machine; construct with `Machine::new`.
pub use crate::sim::Machine;
/// Main memory.
pub use crate::soc::Memory;
