//! Serial transfer abstraction
//!
//! The matrix drivers are write-only shift registers, but the transport is
//! modelled as a full-duplex exchange so a bit-banged or hardware SPI master
//! can be plugged in unchanged.

/// Single byte, full-duplex serial transfer
///
/// Blocks until the byte has been clocked out and returns whatever was
/// clocked in at the same time.
pub trait ByteTransfer {
    /// Error type for transfer operations
    ///
    /// A point-to-point wired bus never fails; such transports use
    /// [`core::convert::Infallible`].
    type Error;

    /// Exchange one byte
    fn transfer(&mut self, byte: u8) -> Result<u8, Self::Error>;

    /// Write a sequence of bytes, discarding what is read back
    fn write_all(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        for &byte in bytes {
            self.transfer(byte)?;
        }
        Ok(())
    }
}

impl<T: ByteTransfer + ?Sized> ByteTransfer for &mut T {
    type Error = T::Error;

    fn transfer(&mut self, byte: u8) -> Result<u8, Self::Error> {
        (**self).transfer(byte)
    }

    fn write_all(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        (**self).write_all(bytes)
    }
}
