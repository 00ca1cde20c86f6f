// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! Holds the state of the processor, and the primitive operations on it


pub mod addressing;
pub mod config;
pub mod flags;
pub mod mem;
pub mod register;
pub mod reset;
pub mod segment;

pub use self::{config::Config, reset::ResetVector};
use self::{
    flags::FlagWord,
    mem::Mem,
    register::{Reg16, Reg8, Register, RegisterBank},
    segment::{Segment, Segments},
};
use crate::error::Result;
use owo_colors::OwoColorize;
use std::fmt::Debug;

/// Represents the complete state of the processor, memory included.
///
/// Nothing here runs on its own: an instruction engine reads and writes the
/// state through these methods, and owns the CPU exclusively while it does.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CPU {
    /// Settings that control how the CPU behaves, but which aren't
    /// architectural state. Includes the [Addressing](addressing::Addressing) policy.
    pub config: Config,
    reset: ResetVector,
    // memory
    mem: Mem,
    // registers
    registers: RegisterBank,
    sp: Register,
    bp: Register,
    si: Register,
    di: Register,
    ip: Register,
    flags: FlagWord,
    segments: Segments,
}

// public interface
impl CPU {
    /// Constructs a new CPU with zeroed memory, in the [ResetVector::POWER_ON] state
    /// # Examples
    /// ```rust
    /// # use v20::*;
    /// let cpu = CPU::new();
    /// assert_eq!(0xffff, cpu.segment(Segment::CS));
    /// assert_eq!(0x0000, cpu.ip());
    /// ```
    pub fn new() -> Self {
        Self::with_reset(Config::default(), ResetVector::POWER_ON)
    }

    /// Constructs a new CPU with the provided [Config], in the [ResetVector::POWER_ON] state
    pub fn with_config(config: Config) -> Self {
        Self::with_reset(config, ResetVector::POWER_ON)
    }

    /// Constructs a new CPU, taking all configurable parameters
    /// # Examples
    /// ```rust
    /// # use v20::*;
    /// // A .COM program loaded at 0x1000:0x0100
    /// let cpu = CPU::with_reset(
    ///     Config::default(),
    ///     ResetVector {
    ///         cs: 0x1000, ds: 0x1000, ss: 0x1000, es: 0x1000,
    ///         ip: 0x0100,
    ///         sp: 0xfffe,
    ///         flags: FlagWord::from_bits(0x0200),
    ///     },
    /// );
    /// assert_eq!(0xfffe, cpu.reg16(Reg16::SP));
    /// assert!(cpu.flags().test(Flag::Interrupt));
    /// ```
    pub fn with_reset(config: Config, reset: ResetVector) -> Self {
        let mut cpu = CPU {
            config,
            reset,
            mem: Mem::new(),
            registers: RegisterBank::default(),
            sp: Register::default(),
            bp: Register::default(),
            si: Register::default(),
            di: Register::default(),
            ip: Register::default(),
            flags: FlagWord::default(),
            segments: Segments::default(),
        };
        cpu.reset();
        cpu
    }

    /// Resets the registers to the stored [ResetVector].
    ///
    /// Touches every register, segment, and the flag word.
    ///
    /// Does not touch memory or the [Config].
    pub fn reset(&mut self) {
        let ResetVector {
            cs,
            ip,
            ds,
            ss,
            es,
            sp,
            flags,
        } = self.reset;
        self.registers = RegisterBank::default();
        self.sp = sp.into();
        self.bp = Register::default();
        self.si = Register::default();
        self.di = Register::default();
        self.ip = ip.into();
        self.flags = flags;
        self.segments = Segments { cs, ds, ss, es };
    }

    /// Gets the [ResetVector] applied by [CPU::reset]
    pub fn reset_vector(&self) -> &ResetVector {
        &self.reset
    }

    /// Gets an 8-bit register by name
    /// # Examples
    /// ```rust
    /// # use v20::*;
    /// let mut cpu = CPU::default();
    /// cpu.set_reg16(Reg16::CX, 0xbeef);
    /// assert_eq!(0xef, cpu.reg8(Reg8::CL));
    /// assert_eq!(0xbe, cpu.reg8(Reg8::CH));
    /// ```
    pub fn reg8(&self, reg: Reg8) -> u8 {
        self.register(reg.word()).half(reg.half())
    }

    /// Sets an 8-bit register by name, leaving the other half of its word alone
    pub fn set_reg8(&mut self, reg: Reg8, value: u8) {
        self.register_mut(reg.word()).set_half(reg.half(), value)
    }

    /// Gets a 16-bit register by name
    pub fn reg16(&self, reg: Reg16) -> u16 {
        self.register(reg).word()
    }

    /// Sets a 16-bit register by name
    pub fn set_reg16(&mut self, reg: Reg16, value: u16) {
        self.register_mut(reg).set_word(value)
    }

    /// Gets the [Register] behind a 16-bit register name
    pub fn register(&self, reg: Reg16) -> &Register {
        match reg {
            Reg16::AX => &self.registers.ax,
            Reg16::CX => &self.registers.cx,
            Reg16::DX => &self.registers.dx,
            Reg16::BX => &self.registers.bx,
            Reg16::SP => &self.sp,
            Reg16::BP => &self.bp,
            Reg16::SI => &self.si,
            Reg16::DI => &self.di,
        }
    }

    /// Gets the [Register] behind a 16-bit register name, mutably
    pub fn register_mut(&mut self, reg: Reg16) -> &mut Register {
        match reg {
            Reg16::AX => &mut self.registers.ax,
            Reg16::CX => &mut self.registers.cx,
            Reg16::DX => &mut self.registers.dx,
            Reg16::BX => &mut self.registers.bx,
            Reg16::SP => &mut self.sp,
            Reg16::BP => &mut self.bp,
            Reg16::SI => &mut self.si,
            Reg16::DI => &mut self.di,
        }
    }

    /// Gets the general purpose [RegisterBank]
    pub fn registers(&self) -> &RegisterBank {
        &self.registers
    }

    /// Gets the general purpose [RegisterBank], mutably
    pub fn registers_mut(&mut self) -> &mut RegisterBank {
        &mut self.registers
    }

    /// Gets the instruction pointer
    pub fn ip(&self) -> u16 {
        self.ip.word()
    }

    /// Sets the instruction pointer
    pub fn set_ip(&mut self, value: u16) {
        self.ip.set_word(value)
    }

    /// Gets the [FlagWord]
    pub fn flags(&self) -> &FlagWord {
        &self.flags
    }

    /// Gets the [FlagWord], mutably
    /// # Examples
    /// ```rust
    /// # use v20::*;
    /// let mut cpu = CPU::default();
    /// cpu.flags_mut().assign(Flag::Zero, true);
    /// assert_eq!(0x0040, cpu.flags().bits());
    /// ```
    pub fn flags_mut(&mut self) -> &mut FlagWord {
        &mut self.flags
    }

    /// Gets a segment register by name
    pub fn segment(&self, segment: Segment) -> u16 {
        self.segments.get(segment)
    }

    /// Sets a segment register by name
    pub fn set_segment(&mut self, segment: Segment, value: u16) {
        self.segments.set(segment, value)
    }

    /// Gets all four [Segments]
    pub fn segments(&self) -> &Segments {
        &self.segments
    }

    /// Gets the [Mem]
    pub fn mem(&self) -> &Mem {
        &self.mem
    }

    /// Gets the [Mem], mutably
    pub fn mem_mut(&mut self) -> &mut Mem {
        &mut self.mem
    }

    /// Translates `segment:offset` into a physical address, using the configured
    /// [Addressing](addressing::Addressing) policy
    /// # Examples
    /// ```rust
    /// # use v20::*;
    /// let cpu = CPU::default();
    /// assert_eq!(Ok(0x10010), cpu.translate(0x1000, 0x0010));
    /// assert_eq!(
    ///     Err(Error::OutOfRange { segment: 0xa000, offset: 0, physical: 0xa0000 }),
    ///     cpu.translate(0xa000, 0x0000),
    /// );
    /// ```
    pub fn translate(&self, segment: u16, offset: u16) -> Result<usize> {
        self.trace(self.config.addressing.translate(segment, offset))
    }

    /// Reads the byte at `segment:offset`
    pub fn read_byte(&self, segment: u16, offset: u16) -> Result<u8> {
        let addr = self.translate(segment, offset)?;
        self.trace(self.mem.read_physical(addr))
    }

    /// Writes a byte to `segment:offset`
    pub fn write_byte(&mut self, segment: u16, offset: u16, data: u8) -> Result<()> {
        let addr = self.translate(segment, offset)?;
        let result = self.mem.write_physical(addr, data);
        self.trace(result)
    }

    /// Reads a little-endian word at `segment:offset`.
    ///
    /// The high byte comes from `offset + 1` in the same segment, wrapping from
    /// `ffff` to `0000`. Each byte is translated and bounds-checked on its own.
    pub fn read_word(&self, segment: u16, offset: u16) -> Result<u16> {
        let low = self.read_byte(segment, offset)?;
        let high = self.read_byte(segment, offset.wrapping_add(1))?;
        Ok(u16::from_le_bytes([low, high]))
    }

    /// Writes a little-endian word to `segment:offset`.
    ///
    /// Both bytes are checked before either is written, so a fault stores nothing.
    /// # Examples
    /// ```rust
    /// # use v20::*;
    /// # fn main() -> Result<()> {
    /// let mut cpu = CPU::default();
    /// cpu.write_word(0x0000, 0x0500, 0x1234)?;
    /// assert_eq!(0x34, cpu.read_byte(0x0000, 0x0500)?);
    /// assert_eq!(0x12, cpu.read_byte(0x0000, 0x0501)?);
    /// # Ok(())
    /// # }
    /// ```
    pub fn write_word(&mut self, segment: u16, offset: u16, data: u16) -> Result<()> {
        let low = self.translate(segment, offset)?;
        let high = self.translate(segment, offset.wrapping_add(1))?;
        let [lo, hi] = data.to_le_bytes();
        let result = self
            .mem
            .write_physical(low, lo)
            .and_then(|_| self.mem.write_physical(high, hi));
        self.trace(result)
    }

    /// Dumps the current state of all CPU registers
    /// # Examples
    /// ```rust
    /// # use v20::*;
    /// let mut cpu = CPU::default();
    /// cpu.dump();
    /// ```
    /// outputs
    /// ```text
    /// AX: 0000 BX: 0000 CX: 0000 DX: 0000
    /// SP: 0000 BP: 0000 SI: 0000 DI: 0000
    /// CS: ffff DS: 0000 SS: 0000 ES: 0000
    /// IP: 0000 FL: 0000 ---------
    /// ```
    pub fn dump(&self) {
        let dumpstyle = owo_colors::Style::new().bright_black();
        let words = |regs: [Reg16; 4]| {
            regs.into_iter()
                .map(|reg| format!("{}: {:04x}", reg.name().to_uppercase(), self.reg16(reg)))
                .collect::<Vec<_>>()
                .join(" ")
        };
        std::println!(
            "{}\n{}\n{}\n{}",
            words([Reg16::AX, Reg16::BX, Reg16::CX, Reg16::DX]),
            words([Reg16::SP, Reg16::BP, Reg16::SI, Reg16::DI]),
            [Segment::CS, Segment::DS, Segment::SS, Segment::ES]
                .into_iter()
                .map(|seg| format!("{}: {:04x}", seg.name().to_uppercase(), self.segment(seg)))
                .collect::<Vec<_>>()
                .join(" "),
            format_args!(
                "IP: {:04x} FL: {:04x} {}",
                self.ip(),
                self.flags.bits(),
                self.flags.style(dumpstyle)
            ),
        );
    }

    /// Prints surfaced faults when [Config::debug] is set
    fn trace<T>(&self, result: Result<T>) -> Result<T> {
        if self.config.debug {
            if let Err(e) = &result {
                std::eprintln!("{} {}", "fault:".bright_black(), e.red());
            }
        }
        result
    }
}

impl Debug for CPU {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CPU")
            .field("config", &self.config)
            .field("registers", &self.registers)
            .field("sp", &self.sp)
            .field("bp", &self.bp)
            .field("si", &self.si)
            .field("di", &self.di)
            .field("ip", &self.ip)
            .field("flags", &self.flags)
            .field("segments", &self.segments)
            .finish_non_exhaustive()
    }
}

impl Default for CPU {
    /// Constructs a new CPU with zeroed memory and the [ResetVector::POWER_ON] registers
    ///
    /// # Examples
    /// ```rust
    /// use v20::*;
    /// let mut cpu = CPU::default();
    /// ```
    fn default() -> Self {
        Self::new()
    }
}
