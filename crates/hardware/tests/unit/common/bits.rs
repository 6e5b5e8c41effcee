//! # Bit-Field Tests
//!
//! Checks the 1-based field helpers against the instruction layouts they serve.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;
use sim32_core::common::bits::low_mask;
use sim32_core::common::{BitRangeError, Field, bit_mask_range, extract};

#[rstest]
#[case::opcode(1, 4, 0x0000_000F)]
#[case::jmp_offset(13, 32, 0xFFFF_F000)]
#[case::mem_offset(14, 32, 0xFFFF_E000)]
#[case::set_imm(9, 32, 0xFFFF_FF00)]
#[case::setu_target(25, 31, 0x7F00_0000)]
#[case::sign_bit(32, 32, 0x8000_0000)]
fn mask_range_covers_layout_fields(#[case] start: u32, #[case] end: u32, #[case] mask: u32) {
    assert_eq!(bit_mask_range(start, end), Ok(mask));
}

#[rstest]
#[case(0, 1)]
#[case(9, 8)]
#[case(30, 33)]
fn mask_range_rejects_invalid(#[case] start: u32, #[case] end: u32) {
    assert_eq!(bit_mask_range(start, end), Err(BitRangeError { start, end }));
}

#[test]
fn extract_treats_start_zero_as_first_bit() {
    assert_eq!(extract(0b1010, 0, 2), extract(0b1010, 1, 2));
    assert_eq!(extract(0xFFFF_FFFF, 33, 4), 0);
}

#[test]
fn field_place_truncates_to_width() {
    let f = Field::new(5, 3);
    assert_eq!(f.place(0b1111), 0b111 << 4);
    assert_eq!(f.max(), 7);
    assert_eq!(f.end(), 7);
}

proptest! {
    #[test]
    fn field_place_then_get_is_masked_identity(start in 1u32..=32, width in 1u32..=32, v in any::<u32>()) {
        prop_assume!(start + width - 1 <= 32);
        let f = Field::new(start, width);
        prop_assert_eq!(f.get(f.place(v)), v & low_mask(width));
        prop_assert_eq!(f.place(v) & !f.mask(), 0);
    }
}
