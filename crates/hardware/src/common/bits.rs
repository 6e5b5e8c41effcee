//! Bit-field helpers.
//!
//! Bit positions are 1-based from the least-significant end: bit 1 is the LSB and
//! bit 32 the MSB. Every instruction layout in [`crate::isa::instruction`] is written
//! in this convention. Extraction never sign-extends; sign handling belongs to the
//! individual instruction.

use super::constants::WORD_BITS;
use super::error::BitRangeError;

/// Returns a mask with the low `width` bits set.
///
/// Widths of 32 or more produce an all-ones mask.
#[inline]
pub const fn low_mask(width: u32) -> u32 {
    if width >= WORD_BITS {
        u32::MAX
    } else {
        (1 << width) - 1
    }
}

/// Extracts a `width`-bit field starting at 1-based bit `start`, right-justified.
///
/// A `start` of 0 is treated as 1. Bits past the top of the word read as zero.
#[inline]
pub const fn extract(word: u32, start: u32, width: u32) -> u32 {
    let shift = start.saturating_sub(1);
    if shift >= WORD_BITS {
        return 0;
    }
    (word >> shift) & low_mask(width)
}

/// Builds a mask covering bits `start..=end` (1-based, inclusive).
///
/// # Errors
///
/// Returns [`BitRangeError`] if `start` is 0, `end` exceeds 32, or `start > end`.
pub const fn bit_mask_range(start: u32, end: u32) -> Result<u32, BitRangeError> {
    if start == 0 || end > WORD_BITS || start > end {
        return Err(BitRangeError { start, end });
    }
    Ok(low_mask(end - start + 1) << (start - 1))
}

/// A fixed bit field inside an instruction word.
///
/// A `start` of 0 is treated as 1, matching [`extract`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Field {
    /// 1-based position of the field's least-significant bit.
    pub start: u32,
    /// Number of bits in the field.
    pub width: u32,
}

impl Field {
    /// Declares a field of `width` bits whose lowest bit is `start`.
    pub const fn new(start: u32, width: u32) -> Self {
        debug_assert!(start != 0, "bit positions are 1-based");
        Self { start, width }
    }

    /// Distance of the field's lowest bit from bit 1.
    const fn shift(self) -> u32 {
        self.start.saturating_sub(1)
    }

    /// 1-based position of the field's most-significant bit.
    ///
    /// A zero-width field ends where it starts.
    pub const fn end(self) -> u32 {
        self.shift() + if self.width == 0 { 1 } else { self.width }
    }

    /// Reads the field from `word`.
    #[inline(always)]
    pub const fn get(self, word: u32) -> u32 {
        extract(word, self.start, self.width)
    }

    /// Reads a single-bit field as a flag.
    #[inline(always)]
    pub const fn flag(self, word: u32) -> bool {
        self.get(word) != 0
    }

    /// Mask of the bits this field occupies within the word.
    pub const fn mask(self) -> u32 {
        low_mask(self.width) << self.shift()
    }

    /// Positions `value` into this field; bits wider than the field are dropped.
    pub const fn place(self, value: u32) -> u32 {
        (value & low_mask(self.width)) << self.shift()
    }

    /// Largest value the field can hold.
    pub const fn max(self) -> u32 {
        low_mask(self.width)
    }
}
