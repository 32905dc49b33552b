//! Jig Controller Link Protocol
//!
//! This crate defines the fixed-format exchange between the display board
//! (bus master) and the jig's test controller over a synchronous serial
//! link clocked at roughly 100 kHz.
//!
//! # Protocol Overview
//!
//! Two frame kinds, both master-initiated:
//!
//! ```text
//! Notify (fire-and-forget, 2 bytes):
//! ┌──────┬────────────┐
//! │ 0x55 │ buttonMask │
//! └──────┴────────────┘
//!
//! Poll request (11 bytes, zero padded):
//! ┌──────┬──────┬───────────────────────┐
//! │ 0x55 │ 0x10 │ 0 0 0 0 0 0 0 0 0     │
//! └──────┴──────┴───────────────────────┘
//!
//! Poll response (11 bytes, read back during the same exchange):
//! ┌───────────┬──────┬──────┬───────┬─────────────────┬───────────┐
//! │ x x x x   │ 0x55 │ 0x10 │ check │ b23-16 b15-8 b7-0 │ activePos │
//! └───────────┴──────┴──────┴───────┴─────────────────┴───────────┘
//! ```
//!
//! There is no retry, CRC, or sequencing: the link is point-to-point and
//! trusted, and the poll is an idempotent latest-value-wins status read. A
//! response with a bad header is dropped and the previous values are kept;
//! the next poll happens after the cooldown, never earlier.

#![no_std]
#![deny(unsafe_code)]

pub mod client;
pub mod cooldown;
pub mod frame;

pub use client::{Exchange, JigClient, NOTIFY_COOLDOWN_MS, POLL_COOLDOWN_MS};
pub use cooldown::Cooldown;
pub use frame::{
    encode_notify, encode_poll_request, FrameError, PollResponse, CMD_READY_CHECK,
    NOTIFY_FRAME_LEN, POLL_FRAME_LEN, SYNC,
};
