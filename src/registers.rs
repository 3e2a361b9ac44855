//! Register map definitions for the MAX7219 display controller.
#![allow(unused_parens)]

use modular_bitfield::prelude::*;

use crate::params::{DisplayTestMode, PowerMode};

/// Register address of `NO-OP`.
pub const REG_NOOP: u8 = 0x00;
/// Register address of `DIGIT 0`. Digits 1-7 follow consecutively.
pub const REG_DIGIT0: u8 = 0x01;
/// Register address of `DIGIT 7`.
pub const REG_DIGIT7: u8 = 0x08;
/// Register address of `DECODE MODE`.
pub const REG_DECODE_MODE: u8 = 0x09;
/// Register address of `INTENSITY`.
pub const REG_INTENSITY: u8 = 0x0A;
/// Register address of `SCAN LIMIT`.
pub const REG_SCAN_LIMIT: u8 = 0x0B;
/// Register address of `SHUTDOWN`.
pub const REG_SHUTDOWN: u8 = 0x0C;
/// Register address of `DISPLAY TEST`.
pub const REG_DISPLAY_TEST: u8 = 0x0F;

/// Code B value rendering a blank digit.
pub const CODE_B_BLANK: u8 = 0x0F;
/// Code B value rendering `-`.
pub const CODE_B_MINUS: u8 = 0x0A;
/// Blank digit with the decimal point lit.
pub const BLANK_WITH_DOT: u8 = 0x8F;

/// Highest value accepted by the scan-limit register.
pub const MAX_SCAN_LIMIT: u8 = 0x07;
/// Highest value accepted by the intensity register.
pub const MAX_INTENSITY: u8 = 0x0F;

/// Minimal metadata exposed by every register value type.
pub trait Register {
    /// Register address as documented in the datasheet.
    const ADDRESS: u8;
    /// Power-up value defined by the datasheet, when there is one.
    const RESET_VALUE: Option<u8>;
}

/// Bitfield representation of a digit register (addresses `0x01`-`0x08`).
///
/// In Code B mode the low nibble selects the character. In no-decode mode
/// bits 6:0 drive segments G-A directly. Bit 7 is the decimal point in both.
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitData {
    // Code B character (bits 3:0).
    pub code: B4,
    #[skip]
    __: B3,
    // Decimal point (bit 7).
    pub decimal_point: bool,
}

impl From<u8> for DigitData {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<DigitData> for u8 {
    fn from(value: DigitData) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `INTENSITY` register (address `0x0A`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntensityControl {
    // PWM duty cycle step (bits 3:0).
    pub duty: B4,
    #[skip]
    __: B4,
}

impl From<u8> for IntensityControl {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<IntensityControl> for u8 {
    fn from(value: IntensityControl) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `SCAN LIMIT` register (address `0x0B`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanLimit {
    // Index of the last scanned digit (bits 2:0).
    pub limit: B3,
    #[skip]
    __: B5,
}

impl From<u8> for ScanLimit {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<ScanLimit> for u8 {
    fn from(value: ScanLimit) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `SHUTDOWN` register (address `0x0C`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shutdown {
    // Operating mode (bit 0).
    pub mode: PowerMode,
    #[skip]
    __: B7,
}

impl From<u8> for Shutdown {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<Shutdown> for u8 {
    fn from(value: Shutdown) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `DISPLAY TEST` register (address `0x0F`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayTest {
    // Test mode (bit 0).
    pub mode: DisplayTestMode,
    #[skip]
    __: B7,
}

impl From<u8> for DisplayTest {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<DisplayTest> for u8 {
    fn from(value: DisplayTest) -> Self {
        value.into_bytes()[0]
    }
}

impl Register for IntensityControl {
    const ADDRESS: u8 = REG_INTENSITY;
    const RESET_VALUE: Option<u8> = None;
}

impl Register for ScanLimit {
    const ADDRESS: u8 = REG_SCAN_LIMIT;
    const RESET_VALUE: Option<u8> = None;
}

impl Register for Shutdown {
    const ADDRESS: u8 = REG_SHUTDOWN;
    const RESET_VALUE: Option<u8> = Some(0x00);
}

impl Register for DisplayTest {
    const ADDRESS: u8 = REG_DISPLAY_TEST;
    const RESET_VALUE: Option<u8> = Some(0x00);
}
