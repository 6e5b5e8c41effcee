//! Whole-machine properties.

use proptest::prelude::*;
use sim32_core::common::{Reg, RegisterFile};
use sim32_core::{Cpu, Memory, execute};

use crate::common::asm;
use crate::common::harness::TestContext;

proptest! {
    /// Same word, same starting state: same outcome.
    #[test]
    fn execution_is_deterministic(word in any::<u32>(), regs in any::<[u32; 8]>(), pc in any::<u32>()) {
        let mut a = Cpu::new();
        a.regs = RegisterFile::from(regs);
        a.pc = pc;
        let mut b = a.clone();
        let mut mem_a = Memory::new();
        let mut mem_b = Memory::new();

        let ra = execute(word, &mut a, &mut mem_a);
        let rb = execute(word, &mut b, &mut mem_b);

        prop_assert_eq!(ra, rb);
        prop_assert_eq!(a, b);
        prop_assert!(mem_a == mem_b);
    }

    /// SET low 24 bits then SETU bits 25-31 reaches every value with bit 32 clear.
    #[test]
    fn set_setu_builds_any_value_below_bit_32(v in 0u32..0x8000_0000) {
        let mut ctx = TestContext::new();
        ctx.run(&[asm::set(3, v & 0xFF_FFFF), asm::setu(3, v >> 24)]);
        prop_assert_eq!(ctx.get_reg(3), v);
    }

    /// SET with the sign flag reaches every value whose top byte is 0xFF.
    #[test]
    fn set_negative_builds_any_value_with_top_byte_ff(low in 0u32..0x100_0000) {
        let mut ctx = TestContext::new();
        ctx.exec(asm::set_neg(0, low)).unwrap();
        prop_assert_eq!(ctx.get_reg(0), 0xFF00_0000 | low);
    }

    /// BSL then BSR by the same amount keeps exactly the low bits that survived.
    #[test]
    fn shift_left_then_right_masks_high_bits(v in any::<u32>(), n in 0u32..32) {
        let mut ctx = TestContext::new();
        ctx.set_reg(1, v);
        ctx.run(&[asm::shift(asm::BSL, 2, 1, n, false), asm::shift(asm::BSR, 2, 2, n, false)]);
        prop_assert_eq!(ctx.get_reg(2), v & (u32::MAX >> n));
    }

    /// Rotating right then left by the same amount is the identity.
    #[test]
    fn rotate_right_then_left_round_trip(v in any::<u32>(), n in 0u32..32) {
        let mut ctx = TestContext::new();
        ctx.set_reg(1, v);
        ctx.run(&[asm::shift(asm::BSR, 2, 1, n, true), asm::shift(asm::BSL, 2, 2, n, true)]);
        prop_assert_eq!(ctx.get_reg(2), v);
    }

    /// BSR then BSL by the same amount clears exactly the low bits that fell off.
    #[test]
    fn shift_right_then_left_masks_low_bits(v in any::<u32>(), n in 0u32..32) {
        let mut ctx = TestContext::new();
        ctx.set_reg(1, v);
        ctx.run(&[asm::shift(asm::BSR, 2, 1, n, false), asm::shift(asm::BSL, 2, 2, n, false)]);
        prop_assert_eq!(ctx.get_reg(2), v & (u32::MAX << n));
    }

    /// Rotating left then right by the same amount is the identity.
    #[test]
    fn rotate_left_then_right_round_trip(v in any::<u32>(), n in 0u32..32) {
        let mut ctx = TestContext::new();
        ctx.set_reg(1, v);
        ctx.run(&[asm::shift(asm::BSL, 2, 1, n, true), asm::shift(asm::BSR, 2, 2, n, true)]);
        prop_assert_eq!(ctx.get_reg(2), v);
    }

    /// A PUT followed by an LD of the same width reads back the stored low bytes.
    #[test]
    fn put_then_ld_round_trips(v in any::<u32>(), offset in 0u32..0x7_FFF8, width in 0u32..3) {
        let mut ctx = TestContext::new();
        ctx.set_reg(1, v);
        ctx.run(&[asm::put_imm(width, 1, 0, offset), asm::ld_imm(width, 2, 0, offset)]);
        let bits = 8 << width;
        let expected = if bits == 32 { v } else { v & ((1 << bits) - 1) };
        prop_assert_eq!(ctx.get_reg(2), expected);
    }
}

#[test]
fn register_trace_does_not_change_results() {
    let program = [
        asm::set(0, 0x12_3456),
        asm::setu(0, 0x12),
        asm::alu_imm(asm::XOR, 1, 0, 0x3_FFFF),
        asm::shift(asm::BSR, 2, 1, 3, true),
    ];
    let mut plain = TestContext::new();
    let mut traced = TestContext::traced();
    plain.run(&program);
    traced.run(&program);
    assert_eq!(plain.regs(), traced.regs());
    assert_eq!(traced.machine.cpu.regs.read(Reg::R0), 0x1212_3456);
}
