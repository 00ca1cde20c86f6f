// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! 16-bit registers, their 8-bit halves, and the names used to reach them

use crate::error::{Error, Result};
use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

/// A 16-bit register which can also be viewed as two 8-bit halves.
///
/// Only the word is stored; the halves are computed from it, so the two views
/// can never disagree.
///
/// # Examples
/// ```rust
/// # use v20::*;
/// let mut ax = Register::default();
/// ax.set_word(0x1234);
/// assert_eq!(0x34, ax.low());
/// assert_eq!(0x12, ax.high());
/// ax.set_high(0xab);
/// assert_eq!(0xab34, ax.word());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Register {
    word: u16,
}

impl Register {
    /// Constructs a register holding `word`
    pub const fn new(word: u16) -> Self {
        Register { word }
    }
    /// Gets the full 16-bit value
    #[inline(always)]
    pub const fn word(&self) -> u16 {
        self.word
    }
    /// Sets the full 16-bit value
    #[inline(always)]
    pub fn set_word(&mut self, value: u16) {
        self.word = value
    }
    /// Gets bits 0..=7
    #[inline(always)]
    pub const fn low(&self) -> u8 {
        self.word as u8
    }
    /// Gets bits 8..=15
    #[inline(always)]
    pub const fn high(&self) -> u8 {
        (self.word >> 8) as u8
    }
    /// Sets bits 0..=7, leaving the high byte alone
    #[inline(always)]
    pub fn set_low(&mut self, value: u8) {
        self.word = (self.word & 0xff00) | value as u16
    }
    /// Sets bits 8..=15, leaving the low byte alone
    #[inline(always)]
    pub fn set_high(&mut self, value: u8) {
        self.word = (self.word & 0x00ff) | (value as u16) << 8
    }
    /// Gets the selected [Half]
    pub const fn half(&self, half: Half) -> u8 {
        match half {
            Half::Low => self.low(),
            Half::High => self.high(),
        }
    }
    /// Sets the selected [Half]
    pub fn set_half(&mut self, half: Half, value: u8) {
        match half {
            Half::Low => self.set_low(value),
            Half::High => self.set_high(value),
        }
    }
}

impl From<u16> for Register {
    fn from(value: u16) -> Self {
        Register::new(value)
    }
}

impl From<Register> for u16 {
    fn from(value: Register) -> Self {
        value.word()
    }
}

/// Selects one byte of a [Register]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Half {
    /// Bits 0..=7
    Low,
    /// Bits 8..=15
    High,
}

/// The general purpose registers
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegisterBank {
    /// Accumulator
    pub ax: Register,
    /// Base
    pub bx: Register,
    /// Counter
    pub cx: Register,
    /// Data
    pub dx: Register,
}

/// Names the eight 8-bit registers, numbered the way instructions encode them
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Reg8 {
    AL = 0,
    CL = 1,
    DL = 2,
    BL = 3,
    AH = 4,
    CH = 5,
    DH = 6,
    BH = 7,
}

impl Reg8 {
    /// Every 8-bit register, in encoding order
    pub const ALL: [Reg8; 8] = [
        Reg8::AL,
        Reg8::CL,
        Reg8::DL,
        Reg8::BL,
        Reg8::AH,
        Reg8::CH,
        Reg8::DH,
        Reg8::BH,
    ];

    /// Decodes a 3-bit register field. Bits above the low three are ignored.
    ///
    /// # Examples
    /// ```rust
    /// # use v20::*;
    /// assert_eq!(Reg8::AH, Reg8::from_index(4));
    /// assert_eq!(Reg8::CL, Reg8::from_index(0b1001));
    /// ```
    pub const fn from_index(index: u8) -> Self {
        Self::ALL[(index & 7) as usize]
    }

    /// Gets the 16-bit register this byte lives in
    pub const fn word(self) -> Reg16 {
        Reg16::from_index(self as u8 & 3)
    }

    /// Gets which half of [Reg8::word] this byte is
    pub const fn half(self) -> Half {
        if self as u8 & 4 == 0 {
            Half::Low
        } else {
            Half::High
        }
    }

    /// Lower-case mnemonic
    pub const fn name(self) -> &'static str {
        ["al", "cl", "dl", "bl", "ah", "ch", "dh", "bh"][self as usize]
    }
}

impl Display for Reg8 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Reg8 {
    type Err = Error;

    /// Parses a mnemonic. Real registers with no 8-bit view give [Error::InvalidWidth].
    fn from_str(s: &str) -> Result<Self> {
        let name = s.to_lowercase();
        if let Some(reg) = Reg8::ALL.into_iter().find(|reg| reg.name() == name) {
            return Ok(reg);
        }
        if name.parse::<Reg16>().is_ok() || name.parse::<crate::cpu::segment::Segment>().is_ok() {
            return Err(Error::InvalidWidth { name: s.to_string() });
        }
        Err(Error::InvalidRegister { name: s.to_string() })
    }
}

/// Names the eight 16-bit registers, numbered the way instructions encode them
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Reg16 {
    AX = 0,
    CX = 1,
    DX = 2,
    BX = 3,
    SP = 4,
    BP = 5,
    SI = 6,
    DI = 7,
}

impl Reg16 {
    /// Every 16-bit register, in encoding order
    pub const ALL: [Reg16; 8] = [
        Reg16::AX,
        Reg16::CX,
        Reg16::DX,
        Reg16::BX,
        Reg16::SP,
        Reg16::BP,
        Reg16::SI,
        Reg16::DI,
    ];

    /// Decodes a 3-bit register field. Bits above the low three are ignored.
    pub const fn from_index(index: u8) -> Self {
        Self::ALL[(index & 7) as usize]
    }

    /// Gets the 8-bit view of this register, if instructions can name one
    ///
    /// # Examples
    /// ```rust
    /// # use v20::*;
    /// assert_eq!(Some(Reg8::DH), Reg16::DX.byte(Half::High));
    /// assert_eq!(None, Reg16::SP.byte(Half::Low));
    /// ```
    pub const fn byte(self, half: Half) -> Option<Reg8> {
        match (self as u8, half) {
            (index @ 0..=3, Half::Low) => Some(Reg8::from_index(index)),
            (index @ 0..=3, Half::High) => Some(Reg8::from_index(index | 4)),
            _ => None,
        }
    }

    /// Lower-case mnemonic
    pub const fn name(self) -> &'static str {
        ["ax", "cx", "dx", "bx", "sp", "bp", "si", "di"][self as usize]
    }
}

impl Display for Reg16 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Reg16 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.to_lowercase();
        if let Some(reg) = Reg16::ALL.into_iter().find(|reg| reg.name() == name) {
            return Ok(reg);
        }
        if Reg8::ALL.into_iter().any(|reg| reg.name() == name) {
            return Err(Error::InvalidWidth { name: s.to_string() });
        }
        Err(Error::InvalidRegister { name: s.to_string() })
    }
}
