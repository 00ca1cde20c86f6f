// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! Error type for the V20 core

use std::ops::Range;
use thiserror::Error;

/// Result type, equivalent to [std::result::Result]<T, [enum@Error]>
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the V20 core.
#[derive(Clone, Debug, Error, PartialEq, Eq, Hash)]
pub enum Error {
    /// A segment:offset pair translated to an address outside of memory
    #[error("{segment:04x}:{offset:04x} (physical {physical:05x}) is outside conventional memory")]
    OutOfRange {
        /// The segment half of the logical address
        segment: u16,
        /// The offset half of the logical address
        offset: u16,
        /// The physical address produced by the active [Addressing](crate::cpu::addressing::Addressing) policy
        physical: u32,
    },
    /// A physical range does not fit inside memory
    #[error("physical range {range:05x?} is outside conventional memory")]
    PhysicalOutOfRange {
        /// The offending range
        range: Range<usize>,
    },
    /// Tried to look up a register that doesn't exist
    #[error("register \"{name}\" does not exist")]
    InvalidRegister {
        /// The name which failed to become a register
        name: String,
    },
    /// Tried to look up a register at a width it doesn't have
    #[error("register \"{name}\" cannot be accessed at that width")]
    InvalidWidth {
        /// The name of the register
        name: String,
    },
    /// Tried to convert string into an addressing policy, but it did not match.
    #[error("no suitable conversion of \"{mode}\" into Addressing")]
    InvalidAddressing {
        /// The string which failed to become an addressing policy
        mode: String,
    },
    /// A memory image was not exactly [MEM_SIZE](crate::cpu::mem::MEM_SIZE) bytes long
    #[error("memory image is {len:#x} bytes, expected {expected:#x}", expected = crate::cpu::mem::MEM_SIZE)]
    MemorySize {
        /// The length of the offending image
        len: usize,
    },
}
