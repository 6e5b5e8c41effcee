//! ALU bitwise operations.

/// Bitwise AND.
#[inline]
pub const fn and(a: u32, b: u32) -> u32 {
    a & b
}

/// Bitwise OR.
#[inline]
pub const fn or(a: u32, b: u32) -> u32 {
    a | b
}

/// Bitwise XOR.
#[inline]
pub const fn xor(a: u32, b: u32) -> u32 {
    a ^ b
}
