//! ALU arithmetic operations.
//!
//! Add, subtract and multiply wrap modulo 2^32. Divide and remainder are unsigned
//! and truncating; a zero divisor is a fault rather than a defined result.

use crate::common::ExecError;

/// Wrapping addition.
#[inline]
pub const fn add(a: u32, b: u32) -> u32 {
    a.wrapping_add(b)
}

/// Wrapping subtraction.
#[inline]
pub const fn sub(a: u32, b: u32) -> u32 {
    a.wrapping_sub(b)
}

/// Wrapping multiplication.
#[inline]
pub const fn mul(a: u32, b: u32) -> u32 {
    a.wrapping_mul(b)
}

/// Unsigned truncating division.
///
/// # Errors
///
/// Returns [`ExecError::DivisionByZero`] when `b` is zero.
pub const fn div(a: u32, b: u32) -> Result<u32, ExecError> {
    match a.checked_div(b) {
        Some(q) => Ok(q),
        None => Err(ExecError::DivisionByZero { op: "div" }),
    }
}

/// Unsigned remainder.
///
/// # Errors
///
/// Returns [`ExecError::DivisionByZero`] when `b` is zero.
pub const fn rem(a: u32, b: u32) -> Result<u32, ExecError> {
    match a.checked_rem(b) {
        Some(r) => Ok(r),
        None => Err(ExecError::DivisionByZero { op: "mod" }),
    }
}
