//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used by the executor. All operands and
//! results are unsigned 32-bit values.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub, Mul, Div, Mod
//! - [`logic`]:      And, Or, Xor
//! - [`shifts`]:     logical shifts and rotates in both directions

/// Integer arithmetic operations (add, subtract, multiply, divide, remainder).
pub mod arithmetic;

/// Bitwise logical operations (and, or, xor).
pub mod logic;

/// Shift and rotate operations.
pub mod shifts;

use crate::common::ExecError;
use crate::isa::instruction::{AluOp, ShiftDir};

/// Arithmetic Logic Unit for integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an ALU operation.
    ///
    /// # Errors
    ///
    /// Returns [`ExecError::DivisionByZero`] for `Div` or `Mod` with `b == 0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sim32_core::core::units::alu::Alu;
    /// use sim32_core::isa::AluOp;
    ///
    /// assert_eq!(Alu::execute(AluOp::Add, u32::MAX, 1), Ok(0));
    /// assert_eq!(Alu::execute(AluOp::Div, 100, 7), Ok(14));
    /// assert!(Alu::execute(AluOp::Mod, 1, 0).is_err());
    /// ```
    pub const fn execute(op: AluOp, a: u32, b: u32) -> Result<u32, ExecError> {
        match op {
            AluOp::Add => Ok(arithmetic::add(a, b)),
            AluOp::Sub => Ok(arithmetic::sub(a, b)),
            AluOp::Mul => Ok(arithmetic::mul(a, b)),
            AluOp::Div => arithmetic::div(a, b),
            AluOp::Mod => arithmetic::rem(a, b),
            AluOp::And => Ok(logic::and(a, b)),
            AluOp::Or => Ok(logic::or(a, b)),
            AluOp::Xor => Ok(logic::xor(a, b)),
        }
    }

    /// Shifts or rotates `value` by `amount`.
    ///
    /// See [`shifts::execute`] for amounts of 32 and above.
    pub const fn shift(dir: ShiftDir, value: u32, amount: u32, rotate: bool) -> u32 {
        shifts::execute(dir, value, amount, rotate)
    }
}
