//! Main Memory.
//!
//! This module implements the machine's fixed 1 MiB byte-addressable memory. It
//! provides:
//! 1. **Storage:** A heap-allocated, zero-initialized byte array that never resizes.
//! 2. **Checked Access:** Byte and slice reads/writes that fail instead of panicking.
//! 3. **Image Loading:** Placing a program or data image at an address.
//!
//! Addresses are `u64` so that `base + offset` arithmetic done by callers cannot wrap
//! back into range; anything at or past [`MEMORY_SIZE`] is rejected.

use std::fmt;
use std::ops::{Index, IndexMut, Range};

use tracing::debug;

use crate::common::{ExecError, MEMORY_SIZE};
use crate::isa::instruction::Width;

/// Byte-addressable main memory.
#[derive(Clone, PartialEq, Eq)]
pub struct Memory {
    data: Box<[u8]>,
}

impl Memory {
    /// Creates a zero-filled memory of [`MEMORY_SIZE`] bytes.
    pub fn new() -> Self {
        Self {
            data: vec![0; MEMORY_SIZE].into_boxed_slice(),
        }
    }

    /// Returns the size of the memory in bytes.
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the memory has no bytes (never the case for [`Memory::new`]).
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Validates `len` bytes starting at `addr` and returns them as an index range.
    ///
    /// # Errors
    ///
    /// Returns [`ExecError::MemoryOutOfBounds`] if any byte lies past the end.
    pub fn check_range(&self, addr: u64, len: usize) -> Result<Range<usize>, ExecError> {
        let fault = || ExecError::MemoryOutOfBounds {
            addr,
            len,
            size: self.data.len(),
        };
        let start = usize::try_from(addr).map_err(|_| fault())?;
        let end = start.checked_add(len).ok_or_else(fault)?;
        if end > self.data.len() {
            return Err(fault());
        }
        Ok(start..end)
    }

    /// Reads one byte.
    ///
    /// # Errors
    ///
    /// Returns [`ExecError::MemoryOutOfBounds`] if `addr` is past the end.
    pub fn read_u8(&self, addr: u64) -> Result<u8, ExecError> {
        let range = self.check_range(addr, 1)?;
        Ok(self.data[range.start])
    }

    /// Writes one byte.
    ///
    /// # Errors
    ///
    /// Returns [`ExecError::MemoryOutOfBounds`] if `addr` is past the end.
    pub fn write_u8(&mut self, addr: u64, val: u8) -> Result<(), ExecError> {
        let range = self.check_range(addr, 1)?;
        self.data[range.start] = val;
        Ok(())
    }

    /// Borrows `len` bytes starting at `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`ExecError::MemoryOutOfBounds`] if the range extends past the end.
    pub fn read_bytes(&self, addr: u64, len: usize) -> Result<&[u8], ExecError> {
        let range = self.check_range(addr, len)?;
        Ok(&self.data[range])
    }

    /// Copies `bytes` into memory starting at `addr`.
    ///
    /// Nothing is written unless the whole range fits.
    ///
    /// # Errors
    ///
    /// Returns [`ExecError::MemoryOutOfBounds`] if the range extends past the end.
    pub fn write_bytes(&mut self, addr: u64, bytes: &[u8]) -> Result<(), ExecError> {
        let range = self.check_range(addr, bytes.len())?;
        self.data[range].copy_from_slice(bytes);
        Ok(())
    }

    /// Reads `width` bytes big-endian from `addr`, zero-extended to 32 bits.
    ///
    /// # Errors
    ///
    /// Returns [`ExecError::MemoryOutOfBounds`] if the access leaves memory.
    pub fn read_be(&self, addr: u64, width: Width) -> Result<u32, ExecError> {
        let bytes = self.read_bytes(addr, width.bytes())?;
        Ok(bytes.iter().fold(0, |acc, &b| (acc << 8) | u32::from(b)))
    }

    /// Writes the low `width` bytes of `value` big-endian at `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`ExecError::MemoryOutOfBounds`] if the access leaves memory; nothing
    /// is written in that case.
    pub fn write_be(&mut self, addr: u64, width: Width, value: u32) -> Result<(), ExecError> {
        let be = value.to_be_bytes();
        self.write_bytes(addr, &be[be.len() - width.bytes()..])
    }

    /// Places a program or data image at `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`ExecError::MemoryOutOfBounds`] if the image does not fit; memory is
    /// left untouched in that case.
    pub fn load(&mut self, addr: u64, image: &[u8]) -> Result<(), ExecError> {
        self.write_bytes(addr, image)?;
        debug!(addr, len = image.len(), "loaded image");
        Ok(())
    }

    /// Loads a sequence of instruction words, big-endian, starting at `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`ExecError::MemoryOutOfBounds`] if the image does not fit; memory is
    /// left untouched in that case.
    pub fn load_words(&mut self, addr: u64, words: &[u32]) -> Result<(), ExecError> {
        let bytes: Vec<u8> = words.iter().flat_map(|w| w.to_be_bytes()).collect();
        self.load(addr, &bytes)
    }

    /// Returns the whole memory as a slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Zeroes every byte.
    pub fn clear(&mut self) {
        self.data.fill(0);
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Memory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let used = self.data.iter().filter(|&&b| b != 0).count();
        f.debug_struct("Memory")
            .field("size", &self.data.len())
            .field("nonzero_bytes", &used)
            .finish()
    }
}

impl Index<usize> for Memory {
    type Output = u8;

    /// Indexes into memory. Panics if `index` is out of bounds.
    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl IndexMut<usize> for Memory {
    /// Indexes into memory for writing. Panics if `index` is out of bounds.
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}
