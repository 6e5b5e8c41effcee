//! # Register Indexing Tests
//!
//! Verifies `Reg` range validation and the eight general-purpose registers. Unlike
//! architectures with a hardwired zero register, every register here holds what
//! was last written to it.

use pretty_assertions::assert_eq;
use sim32_core::common::{ExecError, Reg, RegisterFile};

#[test]
fn initial_values_are_zero() {
    let regs = RegisterFile::new();
    assert_eq!(regs.as_array(), &[0; 8]);
}

#[test]
fn r0_is_general_purpose() {
    let mut regs = RegisterFile::new();
    regs.write(Reg::R0, 0xDEAD_BEEF);
    assert_eq!(regs.read(Reg::R0), 0xDEAD_BEEF);
}

#[test]
fn all_registers_are_independent() {
    let mut regs = RegisterFile::new();
    for r in Reg::all() {
        regs.write(r, r.index() as u32 * 100);
    }
    assert_eq!(regs.as_array(), &[0, 100, 200, 300, 400, 500, 600, 700]);
}

#[test]
fn index_validation() {
    assert_eq!(Reg::new(7), Some(Reg::R7));
    assert_eq!(Reg::new(8), None);
    assert_eq!(Reg::try_from(3), Ok(Reg::R3));
    assert_eq!(Reg::try_from(9), Err(ExecError::RegisterIndexOutOfRange(9)));
}

#[test]
fn display_formats() {
    assert_eq!(Reg::R5.to_string(), "r5");
    let regs = RegisterFile::from([1, 0, 0, 0, 0, 0, 0, 0xFFFF_FFFF]);
    assert_eq!(
        regs.to_string(),
        "r0=0x00000001 r1=0x00000000 r2=0x00000000 r3=0x00000000 \
         r4=0x00000000 r5=0x00000000 r6=0x00000000 r7=0xffffffff"
    );
}

#[test]
fn clear_zeroes_every_register() {
    let mut regs = RegisterFile::from([9; 8]);
    regs.clear();
    assert_eq!(regs, RegisterFile::new());
}
