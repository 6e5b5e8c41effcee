//! In-Memory Disk.
//!
//! A [`Storage`] implementation backed by a byte vector. It keeps the reference
//! disk's addressable size but none of its geometry: every byte is reachable with a
//! single flat address.

use std::fmt;

use crate::common::constants::DISK_CAPACITY;
use crate::soc::traits::{DiskError, Storage};

/// Flat, zero-initialized, in-memory disk.
#[derive(Clone, PartialEq, Eq)]
pub struct RamDisk {
    data: Vec<u8>,
}

impl RamDisk {
    /// Creates a zeroed disk of `capacity` bytes.
    pub fn new(capacity: usize) -> Self {
        Self {
            data: vec![0; capacity],
        }
    }

    /// Zeroes the whole disk.
    pub fn format(&mut self) {
        self.data.fill(0);
    }

    fn range(&self, addr: u64, len: usize) -> Result<std::ops::Range<usize>, DiskError> {
        let fault = || DiskError::OutOfRange {
            addr,
            len,
            capacity: self.data.len(),
        };
        let start = usize::try_from(addr).map_err(|_| fault())?;
        let end = start.checked_add(len).ok_or_else(fault)?;
        if end > self.data.len() {
            return Err(fault());
        }
        Ok(start..end)
    }
}

impl Default for RamDisk {
    fn default() -> Self {
        Self::new(DISK_CAPACITY)
    }
}

impl fmt::Debug for RamDisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RamDisk")
            .field("capacity", &self.data.len())
            .finish_non_exhaustive()
    }
}

impl Storage for RamDisk {
    fn capacity(&self) -> usize {
        self.data.len()
    }

    fn read(&self, addr: u64, buf: &mut [u8]) -> Result<(), DiskError> {
        let range = self.range(addr, buf.len())?;
        buf.copy_from_slice(&self.data[range]);
        Ok(())
    }

    fn write(&mut self, addr: u64, data: &[u8]) -> Result<(), DiskError> {
        let range = self.range(addr, data.len())?;
        self.data[range].copy_from_slice(data);
        Ok(())
    }
}
