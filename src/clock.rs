//! GPIO port clock bookkeeping.
//!
//! On most MCUs a GPIO port must be clocked before its pins can be driven.
//! The chip-select pin of every driver lives on some port, so construction
//! asks the platform to enable that port's clock. [`ClockRegistry`] records
//! which ports are already running so the platform hook is invoked at most
//! once per port, however many drivers share it.
//!
//! [`PORT_CLOCKS`] is the process-wide registry. It starts empty, is only
//! consulted and updated while drivers are constructed, and is never reset.

use core::cell::Cell;

use critical_section::Mutex;

/// GPIO port identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum GpioPort {
    /// Port A.
    A = 0,
    /// Port B.
    B = 1,
    /// Port C.
    C = 2,
    /// Port D.
    D = 3,
    /// Port E.
    E = 4,
    /// Port F.
    F = 5,
    /// Port G.
    G = 6,
    /// Port H.
    H = 7,
    /// Port I.
    I = 8,
    /// Port J.
    J = 9,
    /// Port K.
    K = 10,
}

impl GpioPort {
    /// Zero-based port index.
    pub const fn index(self) -> u8 {
        self as u8
    }

    const fn mask(self) -> u16 {
        1 << self.index()
    }
}

/// Platform hook that starts the peripheral clock of a GPIO port.
pub trait PortClocks {
    /// Enables the clock feeding `port`.
    fn enable_port_clock(&mut self, port: GpioPort);
}

/// [`PortClocks`] for HALs that clock their GPIO ports on their own.
#[derive(Debug, Clone, Copy, Default)]
pub struct HalManagedClocks;

impl PortClocks for HalManagedClocks {
    fn enable_port_clock(&mut self, _port: GpioPort) {}
}

/// Set of GPIO ports whose clock has been enabled.
pub struct ClockRegistry {
    enabled: Mutex<Cell<u16>>,
}

impl ClockRegistry {
    /// Creates an empty registry.
    pub const fn new() -> Self {
        Self {
            enabled: Mutex::new(Cell::new(0)),
        }
    }

    /// Enables the clock of `port` unless it is already recorded as enabled.
    ///
    /// Returns `true` when the platform hook was invoked.
    pub fn ensure_enabled<C>(&self, port: GpioPort, clocks: &mut C) -> bool
    where
        C: PortClocks + ?Sized,
    {
        critical_section::with(|cs| {
            let enabled = self.enabled.borrow(cs);
            if enabled.get() & port.mask() != 0 {
                return false;
            }

            clocks.enable_port_clock(port);
            enabled.set(enabled.get() | port.mask());
            debug!("enabled GPIO port clock {}", port.index());
            true
        })
    }

    /// Returns `true` if the clock of `port` has been enabled through this registry.
    pub fn is_enabled(&self, port: GpioPort) -> bool {
        critical_section::with(|cs| self.enabled.borrow(cs).get() & port.mask() != 0)
    }
}

impl Default for ClockRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Process-wide port clock registry used by [`Max7219::new_spi`](crate::Max7219::new_spi).
pub static PORT_CLOCKS: ClockRegistry = ClockRegistry::new();
