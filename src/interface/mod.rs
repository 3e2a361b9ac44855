//! Bus interface abstraction for the MAX7219 driver.

pub mod spi;

/// Abstraction over the low-level bus access required by the driver.
///
/// The MAX7219 registers are write-only, so a register write is the only
/// transaction the driver ever issues.
pub trait Max7219Interface {
    /// Error type produced by the concrete bus implementation.
    type Error;

    /// Writes `value` to `register` as one framed two-byte transaction.
    fn write_register(&mut self, register: u8, value: u8) -> core::result::Result<(), Self::Error>;

    /// Puts the bus into its resting state between transactions.
    fn idle(&mut self) -> core::result::Result<(), Self::Error>;
}
