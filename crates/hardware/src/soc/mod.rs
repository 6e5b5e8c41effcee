//! Machine Components Outside the CPU.
//!
//! This module organizes the state the executor operates on but does not own:
//! main memory and the secondary storage collaborator.

/// Secondary storage devices.
pub mod devices;

/// Main memory.
pub mod memory;

/// Storage trait definitions.
pub mod traits;

pub use memory::Memory;
