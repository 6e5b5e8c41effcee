//! Secondary storage devices.
//!
//! Devices here sit outside the instruction set: no opcode reaches them. Hosts use
//! them to stage images before copying into main memory.

/// Flat in-memory disk.
pub mod ram_disk;

pub use ram_disk::RamDisk;

pub use crate::soc::traits::{DiskError, Storage};
