//! Recording transport for host tests

use core::cell::RefCell;
use core::convert::Infallible;

use countdown_hal::{ByteTransfer, OutputPin};
use heapless::Vec;

/// Largest bus trace a test records
pub const LOG_CAPACITY: usize = 1024;

/// One observable bus operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// Chip select driven low
    Select,
    /// Chip select driven high (LOAD strobe)
    Deselect,
    /// Byte clocked out
    Byte(u8),
}

pub type Log = RefCell<Vec<Op, LOG_CAPACITY>>;

pub fn new_log() -> Log {
    RefCell::new(Vec::new())
}

pub struct RecordingSpi<'a> {
    log: &'a Log,
}

impl<'a> RecordingSpi<'a> {
    pub fn new(log: &'a Log) -> Self {
        Self { log }
    }
}

impl ByteTransfer for RecordingSpi<'_> {
    type Error = Infallible;

    fn transfer(&mut self, byte: u8) -> Result<u8, Self::Error> {
        self.log.borrow_mut().push(Op::Byte(byte)).expect("log full");
        Ok(0)
    }
}

pub struct RecordingPin<'a> {
    log: &'a Log,
    high: bool,
}

impl<'a> RecordingPin<'a> {
    pub fn new(log: &'a Log) -> Self {
        Self { log, high: false }
    }
}

impl OutputPin for RecordingPin<'_> {
    fn set_high(&mut self) {
        self.high = true;
        self.log.borrow_mut().push(Op::Deselect).expect("log full");
    }

    fn set_low(&mut self) {
        self.high = false;
        self.log.borrow_mut().push(Op::Select).expect("log full");
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

/// Address/data frames in the log, with whether each one was latched
///
/// A frame is latched when the chip select goes high right after it.
pub fn frames(log: &Log) -> Vec<(u8, u8, bool), 256> {
    let ops = log.borrow();
    let mut frames = Vec::new();
    let mut i = 0;
    while i < ops.len() {
        if let (Some(Op::Byte(address)), Some(Op::Byte(data))) = (ops.get(i), ops.get(i + 1)) {
            let latched = ops.get(i + 2) == Some(&Op::Deselect);
            frames.push((*address, *data, latched)).expect("too many frames");
            i += 2;
        } else {
            i += 1;
        }
    }
    frames
}
