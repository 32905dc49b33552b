//! Millisecond tick task
//!
//! The protocol cooldowns are defined in one-millisecond ticks. A full
//! matrix scan busy-waits for ~16 ms without yielding, so instead of
//! poking the client directly, this task accumulates elapsed
//! milliseconds into an atomic; the main cycle drains it once per
//! iteration and applies the ticks in a batch. The Ticker catches up on
//! periods missed while the scan was running, so no ticks are lost.

use defmt::*;
use embassy_time::{Duration, Ticker};
use portable_atomic::{AtomicU32, Ordering};

/// Tick interval in milliseconds
pub const TICK_INTERVAL_MS: u32 = 1;

/// Milliseconds elapsed since the main cycle last drained the counter
static ELAPSED_MS: AtomicU32 = AtomicU32::new(0);

/// Take the milliseconds accumulated since the previous call
pub fn take_elapsed_ms() -> u32 {
    ELAPSED_MS.swap(0, Ordering::Relaxed)
}

/// Tick task - accumulates millisecond ticks for the main cycle
#[embassy_executor::task]
pub async fn tick_task() {
    info!("Tick task started");

    let mut ticker = Ticker::every(Duration::from_millis(TICK_INTERVAL_MS as u64));

    loop {
        ticker.next().await;
        ELAPSED_MS.fetch_add(TICK_INTERVAL_MS, Ordering::Relaxed);
    }
}
