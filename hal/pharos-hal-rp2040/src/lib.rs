//! RP2040-specific HAL for the sensor jig firmware
//!
//! Implements the shared `pharos-hal` traits on top of `embassy-rp`
//! peripherals:
//!
//! - GPIO output/input over `embassy_rp::gpio`
//! - The controller link over blocking `embassy_rp::spi`
//! - Cycle-counted busy-wait delays for shift-register timing

#![no_std]

pub mod delay;
pub mod gpio;
pub mod spi;

pub use delay::BusyDelay;
pub use gpio::{RpInput, RpOutput};
pub use spi::RpSpiBus;
