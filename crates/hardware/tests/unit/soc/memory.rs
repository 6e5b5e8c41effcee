//! Main memory tests.

use pretty_assertions::assert_eq;
use rstest::rstest;
use sim32_core::Memory;
use sim32_core::common::{ExecError, MEMORY_SIZE};
use sim32_core::isa::Width;

#[test]
fn fixed_size_and_zeroed() {
    let memory = Memory::new();
    assert_eq!(memory.len(), MEMORY_SIZE);
    assert!(!memory.is_empty());
    assert!(memory.as_slice().iter().all(|&b| b == 0));
}

#[rstest]
#[case(Width::Byte, 0xAABB_CCDD, vec![0xDD])]
#[case(Width::Half, 0xAABB_CCDD, vec![0xCC, 0xDD])]
#[case(Width::Word, 0xAABB_CCDD, vec![0xAA, 0xBB, 0xCC, 0xDD])]
fn write_be_layout(#[case] width: Width, #[case] value: u32, #[case] bytes: Vec<u8>) {
    let mut memory = Memory::new();
    memory.write_be(0x40, width, value).unwrap();
    assert_eq!(memory.read_bytes(0x40, bytes.len()).unwrap(), bytes.as_slice());
    assert_eq!(
        memory.read_be(0x40, width).unwrap(),
        value & (u32::MAX >> (32 - 8 * bytes.len()))
    );
}

#[test]
fn byte_access_and_indexing() {
    let mut memory = Memory::new();
    memory.write_u8(7, 0x5A).unwrap();
    assert_eq!(memory.read_u8(7), Ok(0x5A));
    assert_eq!(memory[7], 0x5A);
    memory[8] = 0xA5;
    assert_eq!(memory.read_u8(8), Ok(0xA5));
}

#[test]
fn rejects_access_past_the_end() {
    let mut memory = Memory::new();
    let last = (MEMORY_SIZE - 1) as u64;
    assert!(memory.write_u8(last, 1).is_ok());
    assert_eq!(
        memory.read_u8(last + 1),
        Err(ExecError::MemoryOutOfBounds {
            addr: last + 1,
            len: 1,
            size: MEMORY_SIZE,
        })
    );
    assert!(memory.write_be(last - 1, Width::Word, 0xFFFF_FFFF).is_err());
    assert_eq!(memory.read_bytes(last - 1, 2).unwrap(), &[0, 1]);
    assert!(memory.read_be(u64::MAX, Width::Byte).is_err());
}

#[test]
fn program_images_load_big_endian() {
    let mut memory = Memory::new();
    memory.load_words(0x100, &[0x0102_0304, 0xA0B0_C0D0]).unwrap();
    assert_eq!(
        memory.read_bytes(0x100, 8).unwrap(),
        &[1, 2, 3, 4, 0xA0, 0xB0, 0xC0, 0xD0]
    );
    assert!(memory.load((MEMORY_SIZE - 1) as u64, &[1, 2]).is_err());
    assert_eq!(memory.read_u8((MEMORY_SIZE - 1) as u64), Ok(0));
}

#[test]
fn clear_zeroes_memory() {
    let mut memory = Memory::new();
    memory.load(0, &[9; 16]).unwrap();
    memory.clear();
    assert_eq!(memory, Memory::new());
}
