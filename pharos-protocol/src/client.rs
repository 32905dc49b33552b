//! Polling protocol client
//!
//! Owns the two transmission cooldowns and the last-known-good poll
//! results. Each main cycle asks the client what to transmit (at most one
//! frame per cycle) and hands back the raw response of a poll exchange
//! for validation.

use crate::cooldown::Cooldown;
use crate::frame::{
    encode_notify, encode_poll_request, FrameError, PollResponse, BUTTON_MASK_BITS,
    NOTIFY_FRAME_LEN, POLL_FRAME_LEN,
};

/// Minimum interval between button notification frames
pub const NOTIFY_COOLDOWN_MS: u32 = 500;

/// Minimum interval between status polls
pub const POLL_COOLDOWN_MS: u32 = 500;

/// A frame the client wants transmitted this cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Exchange {
    /// Fire-and-forget button notification; no reply expected
    Notify([u8; NOTIFY_FRAME_LEN]),
    /// Combined write+read status poll; expects an 11-byte response
    Poll([u8; POLL_FRAME_LEN]),
}

/// Protocol client state
///
/// The two cooldowns are independent: a button press does not delay the
/// next status poll, and vice versa. Poll results are latched and kept
/// across rejected responses, so a corrupted exchange shows the previous
/// frame's state rather than blanking the display.
#[derive(Debug, Clone)]
pub struct JigClient {
    notify_cooldown: Cooldown,
    poll_cooldown: Cooldown,
    results: u32,
    active_position: u8,
    check_state: u8,
}

impl Default for JigClient {
    fn default() -> Self {
        Self::new()
    }
}

impl JigClient {
    /// Create a client with both cooldowns expired and no results latched
    ///
    /// Until the first accepted poll, the bitfield is all zeros and the
    /// active position is zero, which the mapper renders as sensor 0
    /// "failed at slot 0" being the only meaningful-looking block; the
    /// first poll normally lands within one cooldown period of boot.
    pub fn new() -> Self {
        Self {
            notify_cooldown: Cooldown::new(NOTIFY_COOLDOWN_MS),
            poll_cooldown: Cooldown::new(POLL_COOLDOWN_MS),
            results: 0,
            active_position: 0,
            check_state: 0,
        }
    }

    /// One millisecond tick: decrement both cooldowns
    pub fn tick(&mut self) {
        self.notify_cooldown.tick();
        self.poll_cooldown.tick();
    }

    /// Apply `ms` accumulated millisecond ticks at once
    pub fn tick_by(&mut self, ms: u32) {
        self.notify_cooldown.tick_by(ms);
        self.poll_cooldown.tick_by(ms);
    }

    /// Decide what to transmit this cycle, if anything
    ///
    /// The two branches are mutually exclusive per cycle, selected by the
    /// sampled button state:
    ///
    /// - buttons held and the notify cooldown expired: a notify frame,
    ///   reloading the notify cooldown
    /// - no buttons and the poll cooldown expired: a poll request,
    ///   reloading the poll cooldown (regardless of whether the eventual
    ///   response validates)
    /// - otherwise nothing
    pub fn next_exchange(&mut self, button_mask: u8) -> Option<Exchange> {
        if button_mask & BUTTON_MASK_BITS != 0 {
            if self.notify_cooldown.is_expired() {
                self.notify_cooldown.reload();
                return Some(Exchange::Notify(encode_notify(button_mask)));
            }
        } else if self.poll_cooldown.is_expired() {
            self.poll_cooldown.reload();
            return Some(Exchange::Poll(encode_poll_request()));
        }
        None
    }

    /// Validate a poll response and latch its contents
    ///
    /// On a header mismatch the previously latched bitfield and position
    /// are retained unchanged; stale data is preferred to a flickering
    /// blank. The error is surfaced for logging only.
    pub fn accept_response(&mut self, raw: &[u8; POLL_FRAME_LEN]) -> Result<(), FrameError> {
        let response = PollResponse::parse(raw)?;
        self.results = response.results;
        self.active_position = response.active_position;
        self.check_state = response.check_state;
        Ok(())
    }

    /// Last accepted 24-bit sensor result bitfield
    pub fn results(&self) -> u32 {
        self.results
    }

    /// Last accepted active test position
    pub fn active_position(&self) -> u8 {
        self.active_position
    }

    /// Last accepted controller check state (advisory)
    pub fn check_state(&self) -> u8 {
        self.check_state
    }
}
