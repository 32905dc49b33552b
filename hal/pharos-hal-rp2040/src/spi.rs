//! Controller link bus over blocking embassy-rp SPI
//!
//! The jig link runs at ~100 kHz with 11-byte exchanges, so the blocking
//! driver is the right shape: a full poll costs under a millisecond and
//! the main cycle has nothing else to do while it is in flight.

use embassy_rp::spi::{Blocking, Error, Instance, Spi};

/// A blocking embassy-rp SPI exposed as a [`pharos_hal::SpiBus`]
pub struct RpSpiBus<'d, T: Instance> {
    inner: Spi<'d, T, Blocking>,
}

impl<'d, T: Instance> RpSpiBus<'d, T> {
    /// Wrap a configured blocking SPI peripheral
    pub fn new(inner: Spi<'d, T, Blocking>) -> Self {
        Self { inner }
    }
}

impl<T: Instance> pharos_hal::SpiBus for RpSpiBus<'_, T> {
    type Error = Error;

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.inner.blocking_write(data)
    }

    fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), Self::Error> {
        self.inner.blocking_transfer(read, write)
    }
}
