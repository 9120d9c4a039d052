//! Daisy-chained MAX7219 protocol
//!
//! Every driver in the chain is a 16-bit shift register: an address byte
//! followed by a data byte. Writing N drivers means shifting 2*N bytes
//! through the chain and then raising LOAD once, at which point each driver
//! latches the frame sitting in its own register. The frame shifted first
//! ends up in the farthest driver.

use countdown_core::LatchMode;
use countdown_hal::{ByteTransfer, OutputPin};

/// MAX7219 register addresses
pub mod register {
    pub const NOOP: u8 = 0x00;
    pub const ROW_0: u8 = 0x01; // Row 0 - Row 7 (digit registers)
    pub const DECODE_MODE: u8 = 0x09;
    pub const INTENSITY: u8 = 0x0A;
    pub const SCAN_LIMIT: u8 = 0x0B;
    pub const SHUTDOWN: u8 = 0x0C;
    pub const DISPLAY_TEST: u8 = 0x0F;

    pub mod decode_mode {
        pub const NO_DECODE: u8 = 0x00; // raw bitmaps on every row
    }

    pub mod scan_limit {
        pub const ALL_ROWS: u8 = 0x07;
    }

    pub mod shutdown {
        pub const SHUTDOWN: u8 = 0x00;
        pub const NORMAL_OPERATION: u8 = 0x01;
    }

    pub mod display_test {
        pub const NORMAL: u8 = 0x00;
    }

    /// Row register for scan row `index` (0-7)
    pub const fn row(index: u8) -> u8 {
        ROW_0 + index
    }
}

/// Number of row registers per driver
pub const ROWS: u8 = 8;

/// Highest intensity register value
pub const MAX_INTENSITY: u8 = 0x0F;

/// A chain of `N` MAX7219 drivers on one data line and one LOAD line
///
/// Buffers passed to [`MatrixChain::send_buffer`] are indexed by physical
/// position: index 0 is the driver nearest the microcontroller.
pub struct MatrixChain<SPI, CS, const N: usize> {
    spi: SPI,
    cs: CS,
    latch: LatchMode,
}

impl<SPI, CS, const N: usize> MatrixChain<SPI, CS, N>
where
    SPI: ByteTransfer,
    CS: OutputPin,
{
    /// Take ownership of the bus; LOAD idles high
    pub fn new(spi: SPI, mut cs: CS, latch: LatchMode) -> Self {
        cs.set_high();
        Self { spi, cs, latch }
    }

    /// Number of drivers in the chain
    pub const fn modules(&self) -> usize {
        N
    }

    /// Send one frame and strobe LOAD, latching everything in the chain
    pub fn send_command(&mut self, address: u8, data: u8) -> Result<(), SPI::Error> {
        self.cs.set_low();
        let result = self.send_command_stealth(address, data);
        self.cs.set_high();
        result
    }

    /// Shift one frame into the chain without touching LOAD
    pub fn send_command_stealth(&mut self, address: u8, data: u8) -> Result<(), SPI::Error> {
        self.spi.write_all(&[address, data])
    }

    /// Write `buffer[i]` to register `address` of driver `i`
    ///
    /// Frames go out farthest driver first. With [`LatchMode::Once`] only
    /// the last frame (for driver 0) strobes LOAD.
    pub fn send_buffer(&mut self, address: u8, buffer: &[u8; N]) -> Result<(), SPI::Error> {
        match self.latch {
            LatchMode::Once => {
                for (position, &data) in buffer.iter().enumerate().rev() {
                    if position == 0 {
                        self.send_command(address, data)?;
                    } else {
                        self.send_command_stealth(address, data)?;
                    }
                }
            }
            LatchMode::EveryFrame => {
                for &data in buffer.iter().rev() {
                    self.send_command(address, data)?;
                }
                // Push the frames back out of the shift registers
                for _ in 0..N {
                    self.send_command_stealth(register::NOOP, 0x00)?;
                }
            }
        }
        Ok(())
    }

    /// Write the same value to register `address` of every driver
    pub fn send_fill(&mut self, address: u8, value: u8) -> Result<(), SPI::Error> {
        self.send_buffer(address, &[value; N])
    }

    /// Power-up sequence: raw bitmap mode, all rows scanned, blank, on
    pub fn init(&mut self, intensity: u8) -> Result<(), SPI::Error> {
        self.send_fill(register::DISPLAY_TEST, register::display_test::NORMAL)?;
        self.send_fill(register::SCAN_LIMIT, register::scan_limit::ALL_ROWS)?;
        self.send_fill(register::DECODE_MODE, register::decode_mode::NO_DECODE)?;
        self.clear()?;
        self.set_intensity(intensity)?;
        self.set_enabled(true)
    }

    /// Blank every row of every driver
    pub fn clear(&mut self) -> Result<(), SPI::Error> {
        for row in 0..ROWS {
            self.send_fill(register::row(row), 0x00)?;
        }
        Ok(())
    }

    /// Set brightness on every driver (clamped to 0-15)
    pub fn set_intensity(&mut self, intensity: u8) -> Result<(), SPI::Error> {
        self.send_fill(register::INTENSITY, intensity.min(MAX_INTENSITY))
    }

    /// Leave or enter shutdown on every driver
    pub fn set_enabled(&mut self, enabled: bool) -> Result<(), SPI::Error> {
        let mode = if enabled {
            register::shutdown::NORMAL_OPERATION
        } else {
            register::shutdown::SHUTDOWN
        };
        self.send_fill(register::SHUTDOWN, mode)
    }

    /// Give the bus back
    pub fn release(self) -> (SPI, CS) {
        (self.spi, self.cs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{frames, new_log, Op, RecordingPin, RecordingSpi};

    #[test]
    fn test_new_idles_load_high() {
        let log = new_log();
        let chain: MatrixChain<_, _, 4> =
            MatrixChain::new(RecordingSpi::new(&log), RecordingPin::new(&log), LatchMode::Once);
        assert_eq!(log.borrow().as_slice(), &[Op::Deselect]);
        assert_eq!(chain.modules(), 4);
    }

    #[test]
    fn test_send_command_frames_with_select() {
        let log = new_log();
        let mut chain: MatrixChain<_, _, 4> =
            MatrixChain::new(RecordingSpi::new(&log), RecordingPin::new(&log), LatchMode::Once);
        log.borrow_mut().clear();

        chain.send_command(0x0C, 0x01).unwrap();
        assert_eq!(
            log.borrow().as_slice(),
            &[Op::Select, Op::Byte(0x0C), Op::Byte(0x01), Op::Deselect]
        );
    }

    #[test]
    fn test_stealth_leaves_select_alone() {
        let log = new_log();
        let mut chain: MatrixChain<_, _, 4> =
            MatrixChain::new(RecordingSpi::new(&log), RecordingPin::new(&log), LatchMode::Once);
        log.borrow_mut().clear();

        chain.send_command_stealth(0x03, 0xA5).unwrap();
        assert_eq!(log.borrow().as_slice(), &[Op::Byte(0x03), Op::Byte(0xA5)]);
    }

    #[test]
    fn test_send_buffer_farthest_first_single_latch() {
        let log = new_log();
        let mut chain: MatrixChain<_, _, 4> =
            MatrixChain::new(RecordingSpi::new(&log), RecordingPin::new(&log), LatchMode::Once);
        log.borrow_mut().clear();

        chain.send_buffer(0x05, &[0x10, 0x11, 0x12, 0x13]).unwrap();

        assert_eq!(
            log.borrow().as_slice(),
            &[
                Op::Byte(0x05),
                Op::Byte(0x13),
                Op::Byte(0x05),
                Op::Byte(0x12),
                Op::Byte(0x05),
                Op::Byte(0x11),
                Op::Select,
                Op::Byte(0x05),
                Op::Byte(0x10),
                Op::Deselect,
            ]
        );
    }

    #[test]
    fn test_send_buffer_every_frame_latch_then_flush() {
        let log = new_log();
        let mut chain: MatrixChain<_, _, 2> = MatrixChain::new(
            RecordingSpi::new(&log),
            RecordingPin::new(&log),
            LatchMode::EveryFrame,
        );
        log.borrow_mut().clear();

        chain.send_buffer(0x01, &[0xAA, 0xBB]).unwrap();

        assert_eq!(
            frames(&log).as_slice(),
            &[
                (0x01, 0xBB, true),
                (0x01, 0xAA, true),
                (0x00, 0x00, false),
                (0x00, 0x00, false),
            ]
        );
    }

    #[test]
    fn test_init_sequence() {
        let log = new_log();
        let mut chain: MatrixChain<_, _, 4> =
            MatrixChain::new(RecordingSpi::new(&log), RecordingPin::new(&log), LatchMode::Once);
        log.borrow_mut().clear();

        chain.init(0x08).unwrap();

        let latched: heapless::Vec<(u8, u8), 32> = frames(&log)
            .iter()
            .filter(|(_, _, latched)| *latched)
            .map(|&(address, data, _)| (address, data))
            .collect();

        assert_eq!(
            latched.as_slice(),
            &[
                (0x0F, 0x00),
                (0x0B, 0x07),
                (0x09, 0x00),
                (0x01, 0x00),
                (0x02, 0x00),
                (0x03, 0x00),
                (0x04, 0x00),
                (0x05, 0x00),
                (0x06, 0x00),
                (0x07, 0x00),
                (0x08, 0x00),
                (0x0A, 0x08),
                (0x0C, 0x01),
            ]
        );
        // Four frames per chained write
        assert_eq!(frames(&log).len(), 13 * 4);
    }

    #[test]
    fn test_intensity_clamped() {
        let log = new_log();
        let mut chain: MatrixChain<_, _, 1> =
            MatrixChain::new(RecordingSpi::new(&log), RecordingPin::new(&log), LatchMode::Once);
        log.borrow_mut().clear();

        chain.set_intensity(0x40).unwrap();
        assert_eq!(frames(&log).as_slice(), &[(0x0A, 0x0F, true)]);
    }

    #[test]
    fn test_shutdown() {
        let log = new_log();
        let mut chain: MatrixChain<_, _, 1> =
            MatrixChain::new(RecordingSpi::new(&log), RecordingPin::new(&log), LatchMode::Once);
        log.borrow_mut().clear();

        chain.set_enabled(false).unwrap();
        assert_eq!(frames(&log).as_slice(), &[(0x0C, 0x00, true)]);
    }

    /// Bus that only accepts whole writes
    struct BlockSpi {
        writes: heapless::Vec<[u8; 2], 8>,
    }

    impl ByteTransfer for BlockSpi {
        type Error = core::convert::Infallible;

        fn transfer(&mut self, _byte: u8) -> Result<u8, Self::Error> {
            panic!("frame split into single bytes");
        }

        fn write_all(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
            assert_eq!(bytes.len(), 2);
            self.writes.push([bytes[0], bytes[1]]).unwrap();
            Ok(())
        }
    }

    #[test]
    fn test_frames_are_single_writes() {
        let log = new_log();
        let spi = BlockSpi {
            writes: heapless::Vec::new(),
        };
        let mut chain: MatrixChain<_, _, 2> =
            MatrixChain::new(spi, RecordingPin::new(&log), LatchMode::Once);

        chain.send_buffer(register::row(0), &[0x11, 0x22]).unwrap();
        assert_eq!(chain.spi.writes.as_slice(), &[[0x01, 0x22], [0x01, 0x11]]);
    }
}
