//! Storage trait for secondary storage devices.
//!
//! Secondary storage is a plain byte-addressable service: a capacity plus range reads
//! and writes. The executor never calls it; hosts use it to stage program images and
//! data. Geometry, timing and on-disk formats belong to the implementor.

use thiserror::Error;

/// Errors reported by storage devices.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DiskError {
    /// The requested range extends past the end of the device.
    #[error("disk access of {len} bytes at {addr:#x} extends beyond end of disk of size {capacity}")]
    OutOfRange {
        /// First byte of the access.
        addr: u64,
        /// Number of bytes requested.
        len: usize,
        /// Device capacity in bytes.
        capacity: usize,
    },
}

/// A byte-addressable secondary storage device.
pub trait Storage {
    /// Returns the device size in bytes.
    fn capacity(&self) -> usize;

    /// Fills `buf` with the bytes starting at `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`DiskError::OutOfRange`] if the range does not fit; `buf` is untouched.
    fn read(&self, addr: u64, buf: &mut [u8]) -> Result<(), DiskError>;

    /// Writes `data` starting at `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`DiskError::OutOfRange`] if the range does not fit; nothing is written.
    fn write(&mut self, addr: u64, data: &[u8]) -> Result<(), DiskError>;
}
