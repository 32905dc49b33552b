//! GPIO trait implementations for embassy-rp pins
//!
//! Thin newtype wrappers: both the traits and the embassy types live in
//! other crates, so the impls need a local type to hang off.

use embassy_rp::gpio::{Input, Output};

/// An embassy-rp push-pull output exposed as a [`pharos_hal::OutputPin`]
pub struct RpOutput<'d> {
    inner: Output<'d>,
}

impl<'d> RpOutput<'d> {
    /// Wrap a configured output pin
    pub fn new(inner: Output<'d>) -> Self {
        Self { inner }
    }
}

impl pharos_hal::OutputPin for RpOutput<'_> {
    fn set_high(&mut self) {
        self.inner.set_high();
    }

    fn set_low(&mut self) {
        self.inner.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.inner.is_set_high()
    }
}

/// An embassy-rp input exposed as a [`pharos_hal::InputPin`]
pub struct RpInput<'d> {
    inner: Input<'d>,
}

impl<'d> RpInput<'d> {
    /// Wrap a configured input pin
    pub fn new(inner: Input<'d>) -> Self {
        Self { inner }
    }
}

impl pharos_hal::InputPin for RpInput<'_> {
    fn is_high(&self) -> bool {
        self.inner.is_high()
    }
}
