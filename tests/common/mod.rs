#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::convert::Infallible;
use std::rc::Rc;

use embassy_time::Instant;
use embedded_hal::digital::{ErrorType, InputPin};
use midi_panel::AnalogSource;

pub fn at(ms: u64) -> Instant {
    Instant::from_millis(ms)
}

/// Input pin whose level the test flips through a shared handle.
#[derive(Clone, Default)]
pub struct FakePin {
    level: Rc<Cell<bool>>,
}

impl FakePin {
    pub fn new(level: bool) -> Self {
        Self {
            level: Rc::new(Cell::new(level)),
        }
    }

    pub fn set(&self, level: bool) {
        self.level.set(level);
    }
}

impl ErrorType for FakePin {
    type Error = Infallible;
}

impl InputPin for FakePin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.level.get())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.level.get())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinFault;

impl embedded_hal::digital::Error for PinFault {
    fn kind(&self) -> embedded_hal::digital::ErrorKind {
        embedded_hal::digital::ErrorKind::Other
    }
}

/// Pin that fails every read.
pub struct BrokenPin;

impl ErrorType for BrokenPin {
    type Error = PinFault;
}

impl InputPin for BrokenPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Err(PinFault)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Err(PinFault)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdcFault {
    pub pin: u8,
}

/// ADC returning whatever the test stored per pin, counting reads.
#[derive(Clone, Default)]
pub struct FakeAdc {
    samples: Rc<RefCell<[u16; 8]>>,
    reads: Rc<RefCell<[u32; 8]>>,
    broken: Rc<Cell<Option<u8>>>,
}

impl FakeAdc {
    pub fn set(&self, pin: u8, value: u16) {
        self.samples.borrow_mut()[pin as usize] = value;
    }

    pub fn reads(&self, pin: u8) -> u32 {
        self.reads.borrow()[pin as usize]
    }

    pub fn break_pin(&self, pin: u8) {
        self.broken.set(Some(pin));
    }
}

impl AnalogSource for FakeAdc {
    type Sample = u16;
    type Error = AdcFault;

    fn read(&mut self, pin: u8) -> Result<u16, AdcFault> {
        if self.broken.get() == Some(pin) {
            return Err(AdcFault { pin });
        }
        self.reads.borrow_mut()[pin as usize] += 1;
        Ok(self.samples.borrow()[pin as usize])
    }
}
