//! ALU unit tests.

use pretty_assertions::assert_eq;
use rstest::rstest;
use sim32_core::common::ExecError;
use sim32_core::core::units::alu::Alu;
use sim32_core::isa::{AluOp, ShiftDir};

#[rstest]
#[case::add_wraps(AluOp::Add, u32::MAX, 1, 0)]
#[case::sub_wraps(AluOp::Sub, 0, 1, u32::MAX)]
#[case::mul_wraps(AluOp::Mul, 0x1_0001, 0x1_0000, 0x0001_0000)]
#[case::div_truncates(AluOp::Div, 7, 2, 3)]
#[case::div_unsigned(AluOp::Div, 0xFFFF_FFFE, 2, 0x7FFF_FFFF)]
#[case::mod_unsigned(AluOp::Mod, 0xFFFF_FFFF, 10, 5)]
#[case::and(AluOp::And, 0xF0F0, 0xFF00, 0xF000)]
#[case::or(AluOp::Or, 0xF0F0, 0x0F0F, 0xFFFF)]
#[case::xor(AluOp::Xor, 0xFFFF, 0x0F0F, 0xF0F0)]
fn execute_table(#[case] op: AluOp, #[case] a: u32, #[case] b: u32, #[case] expected: u32) {
    assert_eq!(Alu::execute(op, a, b), Ok(expected));
}

#[rstest]
#[case(AluOp::Div, "div")]
#[case(AluOp::Mod, "mod")]
fn zero_divisor_faults(#[case] op: AluOp, #[case] name: &'static str) {
    assert_eq!(
        Alu::execute(op, 42, 0),
        Err(ExecError::DivisionByZero { op: name })
    );
}

#[rstest]
#[case(ShiftDir::Right, 0x8000_0000, 31, false, 1)]
#[case(ShiftDir::Left, 1, 31, false, 0x8000_0000)]
#[case(ShiftDir::Left, 0xF000_0000, 4, false, 0)]
#[case(ShiftDir::Left, 0xF000_0000, 4, true, 0xF)]
#[case(ShiftDir::Right, 0x1234_5678, 0, true, 0x1234_5678)]
#[case(ShiftDir::Right, 0x1234_5678, 64, false, 0)]
#[case(ShiftDir::Left, 0x1234_5678, 36, true, 0x2345_6781)]
fn shift_table(
    #[case] dir: ShiftDir,
    #[case] value: u32,
    #[case] amount: u32,
    #[case] rotate: bool,
    #[case] expected: u32,
) {
    assert_eq!(Alu::shift(dir, value, amount, rotate), expected);
}
