//! `embedded-hal` adapters for the matrix chain transport
//!
//! The chain only needs [`ByteTransfer`] and a chip-select [`OutputPin`].
//! These wrappers let any `embedded-hal` 1.0 SPI bus and push-pull pin
//! stand in for them.

use core::convert::Infallible;

use countdown_hal::{ByteTransfer, OutputPin};
use embedded_hal::digital::OutputPin as EhOutputPin;
use embedded_hal::spi::SpiBus;

/// SPI bus clocking one byte per transfer
///
/// The bus is flushed after every byte so the chip select can be raised
/// right after the call returns.
pub struct EhSpi<SPI> {
    bus: SPI,
}

impl<SPI> EhSpi<SPI> {
    /// Wrap an SPI bus
    pub fn new(bus: SPI) -> Self {
        Self { bus }
    }

    /// Give the bus back
    pub fn into_inner(self) -> SPI {
        self.bus
    }
}

impl<SPI: SpiBus<u8>> ByteTransfer for EhSpi<SPI> {
    type Error = SPI::Error;

    fn transfer(&mut self, byte: u8) -> Result<u8, Self::Error> {
        let mut buf = [byte];
        self.bus.transfer_in_place(&mut buf)?;
        self.bus.flush()?;
        Ok(buf[0])
    }

    fn write_all(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.bus.write(bytes)?;
        self.bus.flush()
    }
}

/// Push-pull output whose writes cannot fail
///
/// The driven level is tracked here so reads never touch the hardware.
pub struct EhPin<P> {
    pin: P,
    high: bool,
}

impl<P: EhOutputPin<Error = Infallible>> EhPin<P> {
    /// Wrap a pin, driving it to `high`
    pub fn new(pin: P, high: bool) -> Self {
        let mut wrapped = Self { pin, high };
        wrapped.set_state(high);
        wrapped
    }

    /// Give the pin back
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: EhOutputPin<Error = Infallible>> OutputPin for EhPin<P> {
    fn set_high(&mut self) {
        self.pin.set_high().unwrap_or_else(|never| match never {});
        self.high = true;
    }

    fn set_low(&mut self) {
        self.pin.set_low().unwrap_or_else(|never| match never {});
        self.high = false;
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::digital::ErrorType as PinErrorType;
    use embedded_hal::spi::ErrorType as SpiErrorType;
    use heapless::Vec;

    /// Mock SPI bus recording writes and answering with a fixed byte
    struct MockBus {
        sent: Vec<u8, 16>,
        reply: u8,
        flushes: usize,
    }

    impl MockBus {
        fn new(reply: u8) -> Self {
            Self {
                sent: Vec::new(),
                reply,
                flushes: 0,
            }
        }
    }

    impl SpiErrorType for MockBus {
        type Error = Infallible;
    }

    impl SpiBus<u8> for MockBus {
        fn read(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
            words.fill(self.reply);
            Ok(())
        }

        fn write(&mut self, words: &[u8]) -> Result<(), Self::Error> {
            self.sent.extend_from_slice(words).unwrap();
            Ok(())
        }

        fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), Self::Error> {
            self.write(write)?;
            self.read(read)
        }

        fn transfer_in_place(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
            self.sent.extend_from_slice(words).unwrap();
            words.fill(self.reply);
            Ok(())
        }

        fn flush(&mut self) -> Result<(), Self::Error> {
            self.flushes += 1;
            Ok(())
        }
    }

    /// Mock pin counting level changes
    struct MockPin {
        high: bool,
        writes: usize,
    }

    impl PinErrorType for MockPin {
        type Error = Infallible;
    }

    impl EhOutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.high = false;
            self.writes += 1;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.high = true;
            self.writes += 1;
            Ok(())
        }
    }

    #[test]
    fn test_spi_transfer_exchanges_and_flushes() {
        let mut spi = EhSpi::new(MockBus::new(0x5A));
        assert_eq!(spi.transfer(0x0C), Ok(0x5A));
        assert_eq!(spi.transfer(0x01), Ok(0x5A));

        let bus = spi.into_inner();
        assert_eq!(bus.sent.as_slice(), &[0x0C, 0x01]);
        assert_eq!(bus.flushes, 2);
    }

    #[test]
    fn test_spi_write_all_single_flush() {
        let mut spi = EhSpi::new(MockBus::new(0));
        spi.write_all(&[1, 2, 3]).unwrap();

        let bus = spi.into_inner();
        assert_eq!(bus.sent.as_slice(), &[1, 2, 3]);
        assert_eq!(bus.flushes, 1);
    }

    #[test]
    fn test_pin_drives_initial_level() {
        let pin = EhPin::new(MockPin { high: false, writes: 0 }, true);
        assert!(pin.is_set_high());

        let raw = pin.into_inner();
        assert!(raw.high);
        assert_eq!(raw.writes, 1);
    }

    #[test]
    fn test_pin_tracks_level() {
        let mut pin = EhPin::new(MockPin { high: true, writes: 0 }, true);
        pin.set_low();
        assert!(pin.is_set_low());
        pin.toggle();
        assert!(pin.is_set_high());

        let raw = pin.into_inner();
        assert!(raw.high);
        assert_eq!(raw.writes, 3);
    }
}
