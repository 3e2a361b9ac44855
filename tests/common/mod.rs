//! Recording SPI bus and chip-select pin sharing one event log, so tests can
//! check the ordering between pin edges and transmitted bytes.

#![allow(dead_code)]

use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::digital::{ErrorType as PinErrorType, OutputPin};
use embedded_hal::spi::{ErrorType, SpiBus};
use max7219_seg::clock::{GpioPort, PortClocks};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    CsHigh,
    CsLow,
    Byte(u8),
    Flush,
}

pub type Log = Rc<RefCell<Vec<Event>>>;

pub fn new_log() -> Log {
    Rc::new(RefCell::new(Vec::new()))
}

pub struct RecordingBus {
    log: Log,
}

impl RecordingBus {
    pub fn new(log: &Log) -> Self {
        Self { log: Rc::clone(log) }
    }
}

impl ErrorType for RecordingBus {
    type Error = Infallible;
}

impl SpiBus for RecordingBus {
    fn read(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> {
        panic!("driver never reads");
    }

    fn write(&mut self, words: &[u8]) -> Result<(), Self::Error> {
        let mut log = self.log.borrow_mut();
        log.extend(words.iter().map(|byte| Event::Byte(*byte)));
        Ok(())
    }

    fn transfer(&mut self, _read: &mut [u8], _write: &[u8]) -> Result<(), Self::Error> {
        panic!("driver never transfers");
    }

    fn transfer_in_place(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> {
        panic!("driver never transfers");
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(Event::Flush);
        Ok(())
    }
}

pub struct RecordingPin {
    log: Log,
}

impl RecordingPin {
    pub fn new(log: &Log) -> Self {
        Self { log: Rc::clone(log) }
    }
}

impl PinErrorType for RecordingPin {
    type Error = Infallible;
}

impl OutputPin for RecordingPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(Event::CsLow);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(Event::CsHigh);
        Ok(())
    }
}

/// Splits a log into `(address, data)` pairs, asserting every pair is framed
/// as CS high, two bytes, flush, CS low.
pub fn transactions(events: &[Event]) -> Vec<(u8, u8)> {
    assert_eq!(events.len() % 5, 0, "log is not a sequence of whole transactions: {events:?}");
    events
        .chunks(5)
        .map(|frame| match *frame {
            [Event::CsHigh, Event::Byte(address), Event::Byte(data), Event::Flush, Event::CsLow] => {
                (address, data)
            }
            _ => panic!("malformed transaction frame: {frame:?}"),
        })
        .collect()
}

#[derive(Default)]
pub struct CountingClocks {
    pub enabled: Vec<GpioPort>,
}

impl PortClocks for CountingClocks {
    fn enable_port_clock(&mut self, port: GpioPort) {
        self.enabled.push(port);
    }
}
