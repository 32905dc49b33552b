//! Board-agnostic core logic for the sensor jig display firmware
//!
//! This crate contains the display model that does not depend on specific
//! hardware implementations:
//!
//! - Cell encoding for the dual-scan LED matrix (address + color bits)
//! - The 32x32 frame buffer holding the current display state
//! - The per-sensor screen region table
//! - The mapper from sensor results to colored screen regions

#![no_std]
#![deny(unsafe_code)]

pub mod matrix;
