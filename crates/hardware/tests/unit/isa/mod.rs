//! Unit tests for the instruction set.
//!
//! This module aggregates tests for:
//! - Field extraction for every instruction shape.
//! - Decoder rejection of unexecutable words.
//! - Encoder and disassembler output.
