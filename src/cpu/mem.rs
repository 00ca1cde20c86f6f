// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! The Mem represents the conventional memory of the machine
//!
//! Every access is bounds-checked. Nothing outside this module can index the backing buffer.

use crate::error::{Error, Result};
use owo_colors::{OwoColorize, Style};
use std::{
    fmt::{Debug, Display, Formatter},
    ops::Range,
};

/// Size of conventional memory, in bytes (640 KiB)
pub const MEM_SIZE: usize = 0xa0000;

/// A hexdump view of part of [Mem]
pub struct MemWindow<'a> {
    base: usize,
    mem: &'a [u8],
}

impl<'a> Display for MemWindow<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // Green phosphor style formatting, for taste
        let term: Style = Style::new().bold().green().on_black();
        for (index, byte) in self.mem.iter().enumerate() {
            let addr = self.base + index;
            if index == 0 || addr % 16 == 0 {
                write!(f, "{:>05x}{} ", addr.style(term), ":".style(term))?
            }
            write!(f, "{byte:02x}")?;
            write!(
                f,
                "{}",
                match addr % 16 {
                    0xf => "\n",
                    0x7 => "  ",
                    _ if addr % 2 == 1 => " ",
                    _ => "",
                }
            )?
        }
        Ok(())
    }
}

/// 640 KiB of byte-addressable memory, zeroed at construction
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<u8>", into = "Vec<u8>"))]
pub struct Mem {
    memory: Box<[u8]>,
}

impl Mem {
    /// Constructs a zero-filled mem of exactly [MEM_SIZE] bytes
    /// # Examples
    /// ```rust
    /// # use v20::*;
    /// let mem = Mem::new();
    /// assert_eq!(MEM_SIZE, mem.len());
    /// ```
    pub fn new() -> Self {
        Mem {
            memory: vec![0; MEM_SIZE].into_boxed_slice(),
        }
    }

    /// Adopts an existing memory image, which must be exactly [MEM_SIZE] bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        if bytes.len() != MEM_SIZE {
            return Err(Error::MemorySize { len: bytes.len() });
        }
        Ok(Mem {
            memory: bytes.into_boxed_slice(),
        })
    }

    /// Gets the length of the backing memory. This is always [MEM_SIZE].
    pub fn len(&self) -> usize {
        self.memory.len()
    }

    /// Because clippy is so kind:
    pub fn is_empty(&self) -> bool {
        self.memory.is_empty()
    }

    /// Reads the byte at physical address `addr`
    #[inline(always)]
    pub fn read_physical(&self, addr: usize) -> Result<u8> {
        self.memory
            .get(addr)
            .copied()
            .ok_or(Error::PhysicalOutOfRange {
                range: addr..addr.saturating_add(1),
            })
    }

    /// Writes `data` to physical address `addr`
    #[inline(always)]
    pub fn write_physical(&mut self, addr: usize, data: u8) -> Result<()> {
        let byte = self
            .memory
            .get_mut(addr)
            .ok_or(Error::PhysicalOutOfRange {
                range: addr..addr.saturating_add(1),
            })?;
        *byte = data;
        Ok(())
    }

    /// Gets a slice of memory, if `range` lies inside it
    pub fn get(&self, range: Range<usize>) -> Option<&[u8]> {
        self.memory.get(range)
    }

    /// Copies `data` into memory starting at physical address `addr`.
    ///
    /// If any of it would land outside of memory, nothing is written.
    /// # Examples
    /// ```rust
    /// # use v20::*;
    /// # fn main() -> Result<()> {
    /// let mut mem = Mem::new();
    /// mem.load(0x7c00, b"\xeb\xfe")?;
    /// assert_eq!(Some(&b"\xeb\xfe"[..]), mem.get(0x7c00..0x7c02));
    /// assert!(mem.load(MEM_SIZE - 1, b"\xeb\xfe").is_err());
    /// # Ok(())
    /// # }
    /// ```
    pub fn load(&mut self, addr: usize, data: &[u8]) -> Result<&mut Self> {
        let range = addr..addr.saturating_add(data.len());
        match self.memory.get_mut(range.clone()) {
            Some(slice) => slice.copy_from_slice(data),
            None => return Err(Error::PhysicalOutOfRange { range }),
        }
        Ok(self)
    }

    /// Zeroes all of memory
    pub fn clear(&mut self) -> &mut Self {
        self.memory.fill(0);
        self
    }

    /// Creates a window into the Mem which implements Display
    pub fn window(&self, range: Range<usize>) -> Result<MemWindow<'_>> {
        let base = range.start;
        match self.memory.get(range.clone()) {
            Some(mem) => Ok(MemWindow { base, mem }),
            None => Err(Error::PhysicalOutOfRange { range }),
        }
    }
}

impl Default for Mem {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for Mem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mem")
            .field("len", &self.memory.len())
            .finish_non_exhaustive()
    }
}

impl TryFrom<Vec<u8>> for Mem {
    type Error = Error;
    fn try_from(value: Vec<u8>) -> Result<Self> {
        Mem::from_bytes(value)
    }
}

impl From<Mem> for Vec<u8> {
    fn from(value: Mem) -> Self {
        value.memory.into_vec()
    }
}
