//! Execution units.
//!
//! This module contains the functional units the executor delegates to.

/// Arithmetic Logic Unit for integer, bitwise and shift operations.
pub mod alu;
