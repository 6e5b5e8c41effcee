//! Simulation harness.
//!
//! Bundles a CPU, main memory and a disk into a single self-contained machine.

/// Owned CPU, memory and disk.
pub mod machine;

pub use machine::Machine;
