//! Global Machine Constants.
//!
//! This module defines machine-wide constants. It includes:
//! 1. **Memory Constants:** Main memory size and word geometry.
//! 2. **Register Constants:** Size of the general-purpose register file.
//! 3. **Disk Constants:** Addressable size of the secondary storage collaborator.

/// Size of main memory in bytes (1 MiB).
pub const MEMORY_SIZE: usize = 1_048_576;

/// Number of general-purpose registers.
pub const REGISTER_COUNT: usize = 8;

/// Width of an instruction word and of every register, in bits.
pub const WORD_BITS: u32 = 32;

/// Number of platters on the reference disk.
pub const DISK_PLATTERS: usize = 2;

/// Cylinders per platter on the reference disk.
pub const DISK_CYLINDERS_PER_PLATTER: usize = 10;

/// Sectors per cylinder on the reference disk.
pub const DISK_SECTORS_PER_CYLINDER: usize = 10;

/// Bits stored in a single sector.
pub const DISK_BITS_PER_SECTOR: usize = 4096;

/// Total addressable bytes on the reference disk (102,400).
pub const DISK_CAPACITY: usize = DISK_PLATTERS
    * DISK_CYLINDERS_PER_PLATTER
    * DISK_SECTORS_PER_CYLINDER
    * DISK_BITS_PER_SECTOR
    / 8;
