//! High-level MAX7219 device driver implementation.

use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

use crate::clock::{ClockRegistry, GpioPort, PortClocks, PORT_CLOCKS};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::interface::spi::SpiInterface;
use crate::interface::Max7219Interface;
use crate::params::{
    DecodeMode, Digit, DisplayTestMode, Intensity, PowerMode, Symbol, DIGIT_COUNT,
};
use crate::registers::{
    DisplayTest, IntensityControl, ScanLimit, Shutdown, BLANK_WITH_DOT, CODE_B_BLANK,
    CODE_B_MINUS, MAX_INTENSITY, MAX_SCAN_LIMIT, REG_DECODE_MODE, REG_DIGIT0,
    REG_DISPLAY_TEST, REG_INTENSITY, REG_SCAN_LIMIT, REG_SHUTDOWN,
};

/// Synchronous driver for a single MAX7219 display controller.
///
/// Every operation is an immediate register write; nothing is buffered and
/// digit register contents are not mirrored. Only the control registers set
/// through this driver are tracked, in [`Config`].
pub struct Max7219<IFACE> {
    interface: IFACE,
    config: Config,
}

impl<IFACE> Max7219<IFACE> {
    // ==================================================================
    // == Driver Construction & Ownership ===============================
    // ==================================================================
    /// Creates a new driver instance from the provided bus interface.
    ///
    /// No bus traffic is generated; call [`init`](Self::init) to program the chip.
    pub fn new(interface: IFACE, config: Config) -> Self {
        Self { interface, config }
    }

    /// Consumes the driver and returns the owned interface.
    pub fn release(self) -> (IFACE, Config) {
        (self.interface, self.config)
    }

    /// Provides mutable access to the underlying interface.
    pub fn interface_mut(&mut self) -> &mut IFACE {
        &mut self.interface
    }

    /// Returns the control register values last written through this driver.
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl<SPI, CS> Max7219<SpiInterface<SPI, CS>>
where
    SPI: SpiBus,
    CS: OutputPin,
{
    // ==================================================================
    // == SPI Convenience Constructors ==================================
    // ==================================================================
    /// Builds a driver on an SPI bus and chip-select pin and programs the defaults.
    ///
    /// The clock of `port` is enabled through [`PORT_CLOCKS`] first, then
    /// chip-select is driven low and the chip receives:
    /// decode mode Code B for digits 7-0, scan limit 7, 60% intensity, normal operation.
    pub fn new_spi<C>(
        spi: SPI,
        cs: CS,
        port: GpioPort,
        clocks: &mut C,
    ) -> Result<Self, <SpiInterface<SPI, CS> as Max7219Interface>::Error>
    where
        C: PortClocks + ?Sized,
    {
        Self::new_spi_with_config(spi, cs, port, clocks, Config::default())
    }

    /// Same as [`new_spi`](Self::new_spi) with a caller supplied configuration.
    pub fn new_spi_with_config<C>(
        spi: SPI,
        cs: CS,
        port: GpioPort,
        clocks: &mut C,
        config: Config,
    ) -> Result<Self, <SpiInterface<SPI, CS> as Max7219Interface>::Error>
    where
        C: PortClocks + ?Sized,
    {
        Self::new_spi_in(&PORT_CLOCKS, spi, cs, port, clocks, config)
    }

    /// Same as [`new_spi_with_config`](Self::new_spi_with_config) against an explicit registry.
    pub fn new_spi_in<C>(
        registry: &ClockRegistry,
        spi: SPI,
        cs: CS,
        port: GpioPort,
        clocks: &mut C,
        config: Config,
    ) -> Result<Self, <SpiInterface<SPI, CS> as Max7219Interface>::Error>
    where
        C: PortClocks + ?Sized,
    {
        config.validate().map_err(|_| Error::InvalidConfig)?;

        registry.ensure_enabled(port, clocks);
        let mut driver = Self::new(SpiInterface::new(spi, cs), config);
        driver.init()?;
        Ok(driver)
    }

    /// Releases the driver, returning the SPI bus and chip-select pin.
    pub fn release_spi(self) -> (SPI, CS) {
        let (iface, _) = self.release();
        iface.release()
    }
}

impl<IFACE, CommE> Max7219<IFACE>
where
    IFACE: Max7219Interface<Error = CommE>,
{
    // ==================================================================
    // == Initialization ================================================
    // ==================================================================
    /// Idles the bus and writes the active configuration to the chip.
    ///
    /// Registers are programmed in the order decode mode, scan limit,
    /// intensity, shutdown.
    pub fn init(&mut self) -> Result<(), CommE> {
        let config = self.config;
        config.validate().map_err(|_| Error::InvalidConfig)?;

        debug!("initializing MAX7219");
        self.interface.idle()?;
        self.set_decode_mode(config.decode_mode)?;
        self.set_scan_limit(config.scan_limit)?;
        self.set_intensity_raw(config.intensity)?;
        self.set_power_mode(config.power_mode)?;
        Ok(())
    }

    /// Writes `data` to the register at `address` in a single framed transaction.
    ///
    /// Neither argument is checked against the register map.
    pub fn write_register(&mut self, address: u8, data: u8) -> Result<(), CommE> {
        trace!("write reg {=u8:#x} <- {=u8:#x}", address, data);
        self.interface.write_register(address, data).map_err(|err| {
            warn!("register write to {=u8:#x} failed", address);
            Error::from(err)
        })
    }

    // ==================================================================
    // == Digit Output ==================================================
    // ==================================================================
    /// Writes a raw value into the digit register at `digit`.
    ///
    /// In Code B mode the low nibble selects the character; otherwise the
    /// byte drives the segments directly. Bit 7 is the decimal point.
    pub fn print_digit(&mut self, digit: Digit, value: u8) -> Result<(), CommE> {
        self.write_register(digit.address(), value)
    }

    /// Shows a Code B special symbol at `digit`.
    pub fn print_symbol(&mut self, digit: Digit, symbol: Symbol) -> Result<(), CommE> {
        self.write_register(digit.address(), symbol.code())
    }

    /// Blanks `digit` and lights its decimal point.
    ///
    /// The previous content of the digit is not preserved.
    pub fn print_dot(&mut self, digit: Digit) -> Result<(), CommE> {
        self.write_register(digit.address(), BLANK_WITH_DOT)
    }

    /// Blanks all eight digits, lowest address first.
    pub fn clear(&mut self) -> Result<(), CommE> {
        for digit in Digit::ALL {
            self.write_register(digit.address(), CODE_B_BLANK)?;
        }
        Ok(())
    }

    /// Prints a signed decimal number, least significant digit at [`Digit::Dig0`].
    ///
    /// Only the positions the number occupies are written; call
    /// [`clear`](Self::clear) first for a clean display. A negative number
    /// gets a minus sign right after its most significant digit. Values
    /// whose digits plus sign exceed eight positions return
    /// [`Error::DigitOverflow`] before anything is written.
    pub fn print_int(&mut self, value: i32) -> Result<(), CommE> {
        let negative = value < 0;
        let mut magnitude = value.unsigned_abs();

        if magnitude == 0 {
            return self.write_register(REG_DIGIT0, 0);
        }

        let width = decimal_width(magnitude) + usize::from(negative);
        if width > DIGIT_COUNT {
            warn!("{=i32} needs {=usize} digits", value, width);
            return Err(Error::DigitOverflow);
        }

        let mut address = REG_DIGIT0;
        while magnitude != 0 {
            self.write_register(address, (magnitude % 10) as u8)?;
            magnitude /= 10;
            address += 1;
        }

        if negative {
            self.write_register(address, CODE_B_MINUS)?;
        }

        Ok(())
    }

    // ==================================================================
    // == Control Registers =============================================
    // ==================================================================
    /// Sets the brightness to one of the named intensity steps.
    pub fn set_brightness(&mut self, level: Intensity) -> Result<(), CommE> {
        self.set_intensity_raw(level.duty())
    }

    /// Sets the brightness to any of the sixteen duty-cycle steps.
    pub fn set_intensity_raw(&mut self, duty: u8) -> Result<(), CommE> {
        if duty > MAX_INTENSITY {
            warn!("intensity {=u8} out of range", duty);
            return Err(Error::InvalidConfig);
        }

        let register = IntensityControl::new().with_duty(duty);
        self.write_register(REG_INTENSITY, u8::from(register))?;
        self.config.intensity = duty;
        Ok(())
    }

    /// Selects which digits use Code B decoding.
    pub fn set_decode_mode(&mut self, mode: DecodeMode) -> Result<(), CommE> {
        self.write_register(REG_DECODE_MODE, u8::from(mode))?;
        self.config.decode_mode = mode;
        Ok(())
    }

    /// Switches between shutdown and normal operation.
    pub fn set_power_mode(&mut self, mode: PowerMode) -> Result<(), CommE> {
        let register = Shutdown::new().with_mode(mode);
        self.write_register(REG_SHUTDOWN, u8::from(register))?;
        self.config.power_mode = mode;
        Ok(())
    }

    /// Limits scanning to digits `0..=limit`.
    pub fn set_scan_limit(&mut self, limit: u8) -> Result<(), CommE> {
        if limit > MAX_SCAN_LIMIT {
            warn!("scan limit {=u8} out of range", limit);
            return Err(Error::InvalidConfig);
        }

        let register = ScanLimit::new().with_limit(limit);
        self.write_register(REG_SCAN_LIMIT, u8::from(register))?;
        self.config.scan_limit = limit;
        Ok(())
    }

    /// Enters or leaves display-test mode (all segments lit).
    pub fn set_display_test(&mut self, mode: DisplayTestMode) -> Result<(), CommE> {
        let register = DisplayTest::new().with_mode(mode);
        self.write_register(REG_DISPLAY_TEST, u8::from(register))
    }
}

fn decimal_width(mut magnitude: u32) -> usize {
    let mut width = 1;
    while magnitude >= 10 {
        magnitude /= 10;
        width += 1;
    }
    width
}

#[cfg(test)]
mod tests {
    use super::decimal_width;

    #[test]
    fn decimal_width_counts_digits() {
        assert_eq!(decimal_width(1), 1);
        assert_eq!(decimal_width(9), 1);
        assert_eq!(decimal_width(10), 2);
        assert_eq!(decimal_width(99_999_999), 8);
        assert_eq!(decimal_width(u32::MAX), 10);
    }
}
