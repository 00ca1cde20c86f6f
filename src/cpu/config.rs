// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! Settings which change how the [super::CPU] behaves, but aren't part of its state

use super::addressing::Addressing;

/// Settings which change how the CPU behaves, but which aren't architectural state
///
/// # Examples
/// ```rust
/// # use v20::*;
/// let config = Config {
///     addressing: "a20".parse().unwrap(),
///     ..Default::default()
/// };
/// assert_eq!(Addressing::Linear, config.addressing);
/// assert!(!config.debug);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    /// How `segment:offset` pairs become physical addresses
    pub addressing: Addressing,
    /// Set when memory faults should be traced to stderr as they happen
    pub debug: bool,
}

impl Config {
    /// Toggles debug mode
    ///
    /// # Examples
    /// ```rust
    /// # use v20::*;
    /// let mut cpu = CPU::default();
    /// assert_eq!(false, cpu.config.debug);
    /// cpu.config.debug();
    /// assert_eq!(true, cpu.config.debug);
    /// ```
    pub fn debug(&mut self) {
        self.debug = !self.debug
    }
}
