//! Hardware driver implementations
//!
//! This crate provides the drivers that connect the board-agnostic model
//! in `pharos-core` to real pins and buses through the `pharos-hal`
//! traits:
//!
//! - Matrix scan driver (row/column multiplexed shift-register output)
//! - Button array reader (4-bit active-high sample)
//! - Jig controller link (fixed-length synchronous serial exchanges)

#![no_std]
#![deny(unsafe_code)]

pub mod buttons;
pub mod link;
pub mod matrix;
