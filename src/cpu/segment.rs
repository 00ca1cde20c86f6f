// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! Segment registers. These are plain words with no byte views.

use super::register::Reg8;
use crate::error::{Error, Result};
use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

/// Names a segment register, numbered the way instructions encode them
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Segment {
    /// Extra segment
    ES = 0,
    /// Code segment
    CS = 1,
    /// Stack segment
    SS = 2,
    /// Data segment
    DS = 3,
}

impl Segment {
    /// Every segment register, in encoding order
    pub const ALL: [Segment; 4] = [Segment::ES, Segment::CS, Segment::SS, Segment::DS];

    /// Decodes a 2-bit segment field. Bits above the low two are ignored.
    pub const fn from_index(index: u8) -> Self {
        Self::ALL[(index & 3) as usize]
    }

    /// Lower-case mnemonic
    pub const fn name(self) -> &'static str {
        ["es", "cs", "ss", "ds"][self as usize]
    }
}

impl Display for Segment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Segment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.to_lowercase();
        match Segment::ALL.into_iter().find(|seg| seg.name() == name) {
            Some(seg) => Ok(seg),
            None if Reg8::ALL.into_iter().any(|reg| reg.name() == name) => {
                Err(Error::InvalidWidth { name: s.to_string() })
            }
            None => Err(Error::InvalidRegister { name: s.to_string() }),
        }
    }
}

/// The four segment registers
///
/// # Examples
/// ```rust
/// # use v20::*;
/// let mut segments = Segments::default();
/// segments.set(Segment::DS, 0x1000);
/// assert_eq!(0x1000, segments.ds);
/// assert_eq!(0x1000, segments.get(Segment::DS));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segments {
    /// Code segment
    pub cs: u16,
    /// Data segment
    pub ds: u16,
    /// Stack segment
    pub ss: u16,
    /// Extra segment
    pub es: u16,
}

impl Segments {
    /// Gets a segment register by name
    pub fn get(&self, segment: Segment) -> u16 {
        match segment {
            Segment::ES => self.es,
            Segment::CS => self.cs,
            Segment::SS => self.ss,
            Segment::DS => self.ds,
        }
    }

    /// Sets a segment register by name
    pub fn set(&mut self, segment: Segment, value: u16) {
        *match segment {
            Segment::ES => &mut self.es,
            Segment::CS => &mut self.cs,
            Segment::SS => &mut self.ss,
            Segment::DS => &mut self.ds,
        } = value;
    }
}
