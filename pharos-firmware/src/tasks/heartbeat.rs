//! Heartbeat LED task
//!
//! Toggles the carrier board LED every 500 ms. Purely cosmetic - a
//! steady blink tells the operator the firmware is alive even when the
//! matrix is showing an all-idle field.

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_time::{Duration, Ticker};

/// Heartbeat toggle interval in milliseconds
pub const HEARTBEAT_INTERVAL_MS: u64 = 500;

/// Heartbeat task - blinks the board LED
#[embassy_executor::task]
pub async fn heartbeat_task(mut led: Output<'static>) {
    info!("Heartbeat task started");

    let mut ticker = Ticker::every(Duration::from_millis(HEARTBEAT_INTERVAL_MS));

    loop {
        ticker.next().await;
        led.toggle();
    }
}
