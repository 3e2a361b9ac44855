//! Strongly typed parameter enumerations for the MAX7219 driver.
//!
//! These enums map directly to datasheet register encodings and are used across
//! [`Config`](crate::config::Config) and the high-level driver APIs. Prefer these
//! types over raw integers to keep register writes valid and explicit.
//!
//! # Examples
//!
//! ```rust
//! use max7219_seg::params::{DecodeMode, Digit, Intensity, PowerMode};
//!
//! let mode = DecodeMode::CodeBDigits7To0;
//! let level = Intensity::Percent60;
//! let power = PowerMode::Normal;
//! assert_eq!(Digit::Dig0.address(), 0x01);
//! let _ = (mode, level, power);
//! ```

use modular_bitfield::prelude::Specifier;

/// Number of digit positions driven by a single chip.
pub const DIGIT_COUNT: usize = 8;

/// Digit positions, valued with their register address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Digit {
    /// Rightmost digit, register `0x01`.
    Dig0 = 0x01,
    /// Register `0x02`.
    Dig1 = 0x02,
    /// Register `0x03`.
    Dig2 = 0x03,
    /// Register `0x04`.
    Dig3 = 0x04,
    /// Register `0x05`.
    Dig4 = 0x05,
    /// Register `0x06`.
    Dig5 = 0x06,
    /// Register `0x07`.
    Dig6 = 0x07,
    /// Leftmost digit, register `0x08`.
    Dig7 = 0x08,
}

impl Digit {
    /// All positions in ascending register order.
    pub const ALL: [Digit; DIGIT_COUNT] = [
        Self::Dig0,
        Self::Dig1,
        Self::Dig2,
        Self::Dig3,
        Self::Dig4,
        Self::Dig5,
        Self::Dig6,
        Self::Dig7,
    ];

    /// Returns the register address of this position.
    pub const fn address(self) -> u8 {
        self as u8
    }

    /// Returns the position for a zero-based index, if one exists.
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < DIGIT_COUNT {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Zero-based index of this position.
    pub const fn index(self) -> usize {
        (self as u8 - 1) as usize
    }
}

impl From<Digit> for u8 {
    fn from(value: Digit) -> Self {
        value.address()
    }
}

/// Decode-mode register values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum DecodeMode {
    /// Raw segment bits for every digit.
    NoDecode = 0x00,
    /// Code B on digit 0 only.
    CodeBDigit0 = 0x01,
    /// Code B on digits 3 to 0.
    CodeBDigits3To0 = 0x0F,
    /// Code B on digits 7 to 0.
    CodeBDigits7To0 = 0xFF,
}

impl From<DecodeMode> for u8 {
    fn from(value: DecodeMode) -> Self {
        value as u8
    }
}

/// Named intensity (PWM duty-cycle) steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Intensity {
    /// 1/32 duty cycle.
    Min = 0x00,
    /// Roughly 30% brightness.
    Percent30 = 0x05,
    /// Roughly 60% brightness.
    Percent60 = 0x0A,
    /// 31/32 duty cycle.
    Max = 0x0F,
}

impl Intensity {
    /// Returns the 4-bit duty code written to the intensity register.
    pub const fn duty(self) -> u8 {
        self as u8
    }
}

/// Shutdown register modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 1]
pub enum PowerMode {
    /// Display blanked, low-power mode.
    Shutdown = 0,
    /// Normal operation.
    Normal = 1,
}

/// Display-test register modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 1]
pub enum DisplayTestMode {
    /// Normal operation.
    Normal = 0,
    /// All segments lit.
    Test = 1,
}

/// Code B symbols beyond the decimal digits.
///
/// Only meaningful while the target digit is in Code B decode mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Symbol {
    /// `-`
    Minus = 0x0A,
    /// `E`
    E = 0x0B,
    /// `H`
    H = 0x0C,
    /// `L`
    L = 0x0D,
    /// `P`
    P = 0x0E,
}

impl Symbol {
    /// Returns the Code B value of the symbol.
    pub const fn code(self) -> u8 {
        self as u8
    }
}
