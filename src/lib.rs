// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! This crate implements the processor state of a NEC V20, an 8088-compatible
//! CPU, as the foundation an instruction engine can be built on.
//!
//! It owns the registers (with their 8-bit halves), the flag word, the segment
//! registers, and 640 KiB of conventional memory reached through real-mode
//! `segment:offset` translation. It never executes anything on its own.

pub mod cpu;
pub mod error;

pub use cpu::{
    addressing::Addressing,
    flags::{Flag, FlagWord},
    mem::{Mem, MEM_SIZE},
    register::{Half, Reg16, Reg8, Register, RegisterBank},
    segment::{Segment, Segments},
    Config, ResetVector, CPU,
};
pub use error::{Error, Result};

/// Common imports for v20
pub mod prelude {
    use super::*;
    pub use cpu::{
        addressing::Addressing,
        flags::{Flag, FlagWord},
        mem::{Mem, MEM_SIZE},
        register::{Half, Reg16, Reg8, Register, RegisterBank},
        segment::{Segment, Segments},
        Config, ResetVector, CPU,
    };
    pub use error::{Error, Result};
}
