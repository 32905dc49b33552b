//! Pharos Hardware Abstraction Layer
//!
//! This crate defines the hardware traits the jig firmware is written
//! against, so the matrix scan driver, button reader, and controller link
//! can be exercised on the host with mock implementations and run on the
//! target with chip-specific ones.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (pharos-firmware)          │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  pharos-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  pharos-hal-rp2040 (embassy-rp impls)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`spi::SpiBus`] - Synchronous serial master link
//! - [`delay::DelayUs`] - Microsecond busy-wait delays

#![no_std]
#![deny(unsafe_code)]

pub mod delay;
pub mod gpio;
pub mod spi;

// Re-export key traits at crate root for convenience
pub use delay::DelayUs;
pub use gpio::{InputPin, OutputPin};
pub use spi::SpiBus;
