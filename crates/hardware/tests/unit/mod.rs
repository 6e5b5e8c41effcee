//! # Unit Components
//!
//! Central hub for the engine's unit tests, organized the same way as the crate:
//! shared types, the ISA, the core executor, memory and storage, configuration and
//! the machine harness.

/// Unit tests for bit-field helpers and the register file.
pub mod common;



/// Unit tests for decoding, encoding and disassembly.
pub mod isa;


/// Unit tests for main memory and the RAM disk.
pub mod soc;
