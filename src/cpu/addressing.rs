// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! Selects how a `segment:offset` pair becomes a physical address

use super::mem::MEM_SIZE;
use crate::error::{Error, Result};
use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

/// Width mask of the 8088's 20 address lines
pub const ADDRESS_MASK: u32 = 0xf_ffff;

/// Selects how a `segment:offset` pair is turned into a physical address.
///
/// Both policies compute `segment * 16 + offset` without truncation first.
/// Any address at or past [MEM_SIZE] is reported as [Error::OutOfRange];
/// nothing ever mirrors back into conventional memory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Addressing {
    /// 8088 behavior: the sum wraps modulo 1 MiB, so `ffff:0010` is `00000`
    #[default]
    Wrap20,
    /// A20 line enabled: the sum is used as-is, reaching up to `10ffef`
    Linear,
}

impl Addressing {
    /// Computes the physical address of `segment:offset`, without a bounds check
    ///
    /// # Examples
    /// ```rust
    /// # use v20::*;
    /// assert_eq!(0x00000, Addressing::Wrap20.physical(0xffff, 0x0010));
    /// assert_eq!(0x100000, Addressing::Linear.physical(0xffff, 0x0010));
    /// ```
    #[inline(always)]
    pub const fn physical(self, segment: u16, offset: u16) -> u32 {
        let linear = ((segment as u32) << 4) + offset as u32;
        match self {
            Addressing::Wrap20 => linear & ADDRESS_MASK,
            Addressing::Linear => linear,
        }
    }

    /// Translates `segment:offset` into an index into memory.
    ///
    /// Returns [Error::OutOfRange] if the physical address is not below [MEM_SIZE].
    ///
    /// # Examples
    /// ```rust
    /// # use v20::*;
    /// assert_eq!(Ok(0x10010), Addressing::Wrap20.translate(0x1000, 0x0010));
    /// assert!(Addressing::Wrap20.translate(0xa000, 0x0000).is_err());
    /// ```
    pub fn translate(self, segment: u16, offset: u16) -> Result<usize> {
        let physical = self.physical(segment, offset);
        if (physical as usize) < MEM_SIZE {
            Ok(physical as usize)
        } else {
            Err(Error::OutOfRange {
                segment,
                offset,
                physical,
            })
        }
    }
}

impl Display for Addressing {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Addressing::Wrap20 => "wrap20",
            Addressing::Linear => "linear",
        })
    }
}

impl FromStr for Addressing {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "wrap20" | "wrap" | "8088" => Ok(Addressing::Wrap20),
            "linear" | "a20" => Ok(Addressing::Linear),
            _ => Err(Error::InvalidAddressing {
                mode: s.to_string(),
            }),
        }
    }
}
