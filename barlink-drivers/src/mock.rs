//! Recording fakes for the hal traits
//!
//! Every fake appends to one shared log so tests can check the relative
//! order of bus writes, pin changes and delays.

use std::cell::RefCell;
use std::rc::Rc;
use std::vec::Vec;

use barlink_hal::{I2cBus, OutputPin, UartTx};
use embedded_hal::delay::DelayNs;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    I2c { address: u8, data: Vec<u8> },
    Uart(Vec<u8>),
    Baud(u32),
    Pin(&'static str, bool),
    DelayUs(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError;

pub type Log = Rc<RefCell<Vec<Event>>>;

pub fn log() -> Log {
    Rc::new(RefCell::new(Vec::new()))
}

/// Remaining successful operations before a fake starts failing
#[derive(Debug, Clone, Copy)]
pub struct FailAfter(pub Option<usize>);

impl FailAfter {
    fn tick(&mut self) -> Result<(), MockError> {
        match &mut self.0 {
            Some(0) => Err(MockError),
            Some(n) => {
                *n -= 1;
                Ok(())
            }
            None => Ok(()),
        }
    }
}

pub struct MockI2c {
    pub log: Log,
    pub fail: FailAfter,
}

impl MockI2c {
    pub fn new(log: &Log) -> Self {
        Self {
            log: log.clone(),
            fail: FailAfter(None),
        }
    }
}

impl I2cBus for MockI2c {
    type Error = MockError;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), MockError> {
        self.fail.tick()?;
        self.log.borrow_mut().push(Event::I2c {
            address,
            data: data.to_vec(),
        });
        Ok(())
    }
}

pub struct MockUart {
    pub log: Log,
    pub fail: FailAfter,
    /// Baud rate the UART refuses to switch to
    pub reject_baud: Option<u32>,
}

impl MockUart {
    pub fn new(log: &Log) -> Self {
        Self {
            log: log.clone(),
            fail: FailAfter(None),
            reject_baud: None,
        }
    }
}

impl UartTx for MockUart {
    type Error = MockError;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), MockError> {
        self.fail.tick()?;
        self.log.borrow_mut().push(Event::Uart(data.to_vec()));
        Ok(())
    }

    fn flush(&mut self) -> Result<(), MockError> {
        Ok(())
    }

    fn set_baudrate(&mut self, baudrate: u32) -> Result<(), MockError> {
        if self.reject_baud == Some(baudrate) {
            return Err(MockError);
        }
        self.log.borrow_mut().push(Event::Baud(baudrate));
        Ok(())
    }
}

pub struct MockPin {
    name: &'static str,
    log: Log,
    high: bool,
}

impl MockPin {
    pub fn new(name: &'static str, log: &Log) -> Self {
        Self {
            name,
            log: log.clone(),
            high: false,
        }
    }
}

impl OutputPin for MockPin {
    fn set_high(&mut self) {
        self.high = true;
        self.log.borrow_mut().push(Event::Pin(self.name, true));
    }

    fn set_low(&mut self) {
        self.high = false;
        self.log.borrow_mut().push(Event::Pin(self.name, false));
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

pub struct MockDelay {
    log: Log,
}

impl MockDelay {
    pub fn new(log: &Log) -> Self {
        Self { log: log.clone() }
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.log.borrow_mut().push(Event::DelayUs(ns / 1_000));
    }

    fn delay_us(&mut self, us: u32) {
        self.log.borrow_mut().push(Event::DelayUs(us));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.log.borrow_mut().push(Event::DelayUs(ms * 1_000));
    }
}

/// Bytes written to the I2C bus, one entry per single-byte write
pub fn i2c_bytes(log: &Log) -> Vec<u8> {
    log.borrow()
        .iter()
        .filter_map(|event| match event {
            Event::I2c { data, .. } => Some(data.clone()),
            _ => None,
        })
        .flatten()
        .collect()
}

/// Concatenated UART traffic
pub fn uart_bytes(log: &Log) -> Vec<u8> {
    log.borrow()
        .iter()
        .filter_map(|event| match event {
            Event::Uart(data) => Some(data.clone()),
            _ => None,
        })
        .flatten()
        .collect()
}

/// Sum of all recorded delays in microseconds
pub fn total_delay_us(log: &Log) -> u64 {
    log.borrow()
        .iter()
        .map(|event| match event {
            Event::DelayUs(us) => *us as u64,
            _ => 0,
        })
        .sum()
}
