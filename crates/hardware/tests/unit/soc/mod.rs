//! Unit tests for memory and storage.


/// Main memory access checks and byte order.
pub mod memory;
