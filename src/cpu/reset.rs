// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! Register values loaded when the [super::CPU] is reset

use super::flags::FlagWord;

/// The values the CPU's registers take on reset.
///
/// Registers not named here (`ax`, `bx`, `cx`, `dx`, `bp`, `si`, `di`) reset to zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResetVector {
    /// Code segment
    pub cs: u16,
    /// Instruction pointer
    pub ip: u16,
    /// Data segment
    pub ds: u16,
    /// Stack segment
    pub ss: u16,
    /// Extra segment
    pub es: u16,
    /// Stack pointer
    pub sp: u16,
    /// Flag word
    pub flags: FlagWord,
}

impl ResetVector {
    /// Hardware reset: execution starts at `ffff:0000` with everything else cleared
    ///
    /// | register | value
    /// |----------|--------
    /// | cs       |`0xffff`
    /// | ip       |`0x0000`
    /// | ds/ss/es |`0x0000`
    /// | sp       |`0x0000`
    /// | flags    |`0x0000`
    pub const POWER_ON: ResetVector = ResetVector {
        cs: 0xffff,
        ip: 0x0000,
        ds: 0x0000,
        ss: 0x0000,
        es: 0x0000,
        sp: 0x0000,
        flags: FlagWord::from_bits(0),
    };
}

impl Default for ResetVector {
    fn default() -> Self {
        Self::POWER_ON
    }
}
