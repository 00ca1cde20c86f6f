// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! The processor status word, and the names of its bits

use std::fmt::{Display, Formatter};

/// A named bit in the [FlagWord].
///
/// The discriminants are the bit masks themselves. Snapshots and traces store
/// the flag word directly, so these values must never change.
#[repr(u16)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Flag {
    /// Carry out of (or borrow into) the most significant bit
    Carry = 0x0001,
    /// Low byte of the result has an even number of set bits
    Parity = 0x0004,
    /// Carry out of the low nibble, for BCD adjustment
    AuxCarry = 0x0010,
    /// Result was zero
    Zero = 0x0040,
    /// Most significant bit of the result was set
    Sign = 0x0080,
    /// Single-step trap after each instruction
    Trap = 0x0100,
    /// Maskable interrupts are accepted
    Interrupt = 0x0200,
    /// String instructions walk downward
    Direction = 0x0400,
    /// Signed result did not fit
    Overflow = 0x0800,
}

impl Flag {
    /// Every flag, lowest bit first
    pub const ALL: [Flag; 9] = [
        Flag::Carry,
        Flag::Parity,
        Flag::AuxCarry,
        Flag::Zero,
        Flag::Sign,
        Flag::Trap,
        Flag::Interrupt,
        Flag::Direction,
        Flag::Overflow,
    ];

    /// Gets the bit mask of this flag
    #[inline(always)]
    pub const fn mask(self) -> u16 {
        self as u16
    }

    /// Gets the conventional one-letter name of this flag
    pub const fn letter(self) -> char {
        match self {
            Flag::Carry => 'C',
            Flag::Parity => 'P',
            Flag::AuxCarry => 'A',
            Flag::Zero => 'Z',
            Flag::Sign => 'S',
            Flag::Trap => 'T',
            Flag::Interrupt => 'I',
            Flag::Direction => 'D',
            Flag::Overflow => 'O',
        }
    }
}

/// The 16-bit flag register.
///
/// Reserved bits are kept exactly as written, so a restored word reads back bit-for-bit.
///
/// # Examples
/// ```rust
/// # use v20::*;
/// let mut flags = FlagWord::default();
/// flags.set(Flag::Carry);
/// flags.assign(Flag::Overflow, true);
/// assert!(flags.test(Flag::Carry));
/// assert_eq!(0x0801, flags.bits());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FlagWord(u16);

impl FlagWord {
    /// Constructs a flag word from its raw bits
    pub const fn from_bits(bits: u16) -> Self {
        FlagWord(bits)
    }
    /// Gets the raw bits
    pub const fn bits(&self) -> u16 {
        self.0
    }
    /// Replaces the raw bits
    pub fn set_bits(&mut self, bits: u16) {
        self.0 = bits
    }
    /// Returns whether `flag` is set
    #[inline(always)]
    pub const fn test(&self, flag: Flag) -> bool {
        self.0 & flag.mask() != 0
    }
    /// Sets `flag`
    #[inline(always)]
    pub fn set(&mut self, flag: Flag) {
        self.0 |= flag.mask()
    }
    /// Clears `flag`
    #[inline(always)]
    pub fn clear(&mut self, flag: Flag) {
        self.0 &= !flag.mask()
    }
    /// Sets `flag` if `value`, else clears it
    #[inline(always)]
    pub fn assign(&mut self, flag: Flag, value: bool) {
        if value {
            self.set(flag)
        } else {
            self.clear(flag)
        }
    }
    /// Inverts `flag`
    pub fn toggle(&mut self, flag: Flag) {
        self.0 ^= flag.mask()
    }

    /// Returns true when the low byte of `value` has an even number of set bits,
    /// which is what [Flag::Parity] should become after an arithmetic result.
    ///
    /// # Examples
    /// ```rust
    /// # use v20::*;
    /// assert!(FlagWord::parity_of(0x03));
    /// assert!(!FlagWord::parity_of(0x07));
    /// // only the low byte counts
    /// assert!(FlagWord::parity_of(0x0100));
    /// ```
    #[inline(always)]
    pub const fn parity_of(value: u16) -> bool {
        (value as u8).count_ones() % 2 == 0
    }
}

impl From<u16> for FlagWord {
    fn from(value: u16) -> Self {
        FlagWord(value)
    }
}

impl From<FlagWord> for u16 {
    fn from(value: FlagWord) -> Self {
        value.0
    }
}

impl Display for FlagWord {
    /// Formats as `ODITSZAPC`, upper case when set and `-` when clear
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Flag::ALL
            .iter()
            .rev()
            .map(|&flag| if self.test(flag) { flag.letter() } else { '-' })
            .try_for_each(|c| write!(f, "{c}"))
    }
}
