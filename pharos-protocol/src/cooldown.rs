//! Transmission cooldown timers
//!
//! Each frame kind is gated by its own countdown: a successful send
//! reloads the counter to a fixed period, and a periodic one-millisecond
//! tick counts it back down. The counter floors at zero and never
//! underflows, so a missed reload can only make the next send earlier,
//! not wrap it.

/// Millisecond countdown gating the minimum interval between sends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cooldown {
    remaining_ms: u32,
    period_ms: u32,
}

impl Cooldown {
    /// Create a cooldown that starts expired
    ///
    /// Starting expired lets the first send of each kind go out on the
    /// first cycle after boot instead of waiting out a full period.
    pub fn new(period_ms: u32) -> Self {
        Self {
            remaining_ms: 0,
            period_ms,
        }
    }

    /// One millisecond has elapsed; decrement, flooring at zero
    pub fn tick(&mut self) {
        self.remaining_ms = self.remaining_ms.saturating_sub(1);
    }

    /// `ms` milliseconds have elapsed
    ///
    /// Equivalent to `ms` calls to [`tick`](Self::tick); lets the caller
    /// batch up ticks that accrued while it was busy scanning.
    pub fn tick_by(&mut self, ms: u32) {
        self.remaining_ms = self.remaining_ms.saturating_sub(ms);
    }

    /// Whether a send of this kind may occur now
    pub fn is_expired(&self) -> bool {
        self.remaining_ms == 0
    }

    /// Restart the countdown after a send
    pub fn reload(&mut self) {
        self.remaining_ms = self.period_ms;
    }

    /// Milliseconds until the next send is allowed
    pub fn remaining_ms(&self) -> u32 {
        self.remaining_ms
    }
}
