//! Common component tests.

/// Bit extraction and mask construction.
pub mod bits;

/// Register index validation and register file behavior.
pub mod register_indexing;
