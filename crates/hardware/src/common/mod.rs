//! Common utilities and types used throughout the simulator.
//!
//! This module provides the building blocks shared by the decoder, the executor and
//! the memory model. It includes:
//! 1. **Bit Fields:** Extraction and mask construction over 1-based bit positions.
//! 2. **Constants:** Machine-wide sizes (memory, register file, disk).
//! 3. **Error Handling:** Fault types raised by decode and execution.
//! 4. **Register Management:** The eight-entry general-purpose register file.

/// Bit-field extraction and mask helpers.
pub mod bits;

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types for decode, execution and bit-range construction.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use bits::{Field, bit_mask_range, extract};
pub use constants::{MEMORY_SIZE, REGISTER_COUNT};
pub use error::{BitRangeError, ExecError};
pub use reg::{Reg, RegisterFile};
