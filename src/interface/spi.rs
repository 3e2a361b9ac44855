//! SPI interface implementation built on top of `embedded-hal` `SpiBus` and `OutputPin`.
//!
//! Chip-select is driven by hand: HIGH for the duration of a transaction and
//! LOW at rest. The SPI bus must run in mode 0 at 10 MHz or less.

use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

use super::Max7219Interface;

/// Failure of one of the two lines owned by [`SpiInterface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterfaceError<SpiE, PinE> {
    /// The SPI bus rejected a byte or flush.
    Spi(SpiE),
    /// The chip-select pin could not be driven.
    Pin(PinE),
}

/// SPI-based interface implementation for the MAX7219 driver.
pub struct SpiInterface<SPI, CS> {
    spi: SPI,
    cs: CS,
}

impl<SPI, CS> SpiInterface<SPI, CS> {
    /// Creates a new interface from an SPI bus and a chip-select output pin.
    pub const fn new(spi: SPI, cs: CS) -> Self {
        Self { spi, cs }
    }

    /// Provides mutable access to the wrapped SPI bus.
    pub fn spi_mut(&mut self) -> &mut SPI {
        &mut self.spi
    }

    /// Consumes the interface and returns the owned SPI bus and chip-select pin.
    pub fn release(self) -> (SPI, CS) {
        (self.spi, self.cs)
    }
}

impl<SPI, CS> SpiInterface<SPI, CS>
where
    SPI: SpiBus,
{
    fn send(&mut self, register: u8, value: u8) -> core::result::Result<(), SPI::Error> {
        self.spi.write(&[register])?;
        self.spi.write(&[value])?;
        self.spi.flush()
    }
}

impl<SPI, CS> Max7219Interface for SpiInterface<SPI, CS>
where
    SPI: SpiBus,
    CS: OutputPin,
{
    type Error = InterfaceError<SPI::Error, CS::Error>;

    fn write_register(&mut self, register: u8, value: u8) -> core::result::Result<(), Self::Error> {
        self.cs.set_high().map_err(InterfaceError::Pin)?;

        // CS is released even when a byte fails; the bus error wins.
        let sent = self.send(register, value).map_err(InterfaceError::Spi);
        let released = self.cs.set_low().map_err(InterfaceError::Pin);
        sent.and(released)
    }

    fn idle(&mut self) -> core::result::Result<(), Self::Error> {
        self.cs.set_low().map_err(InterfaceError::Pin)
    }
}
