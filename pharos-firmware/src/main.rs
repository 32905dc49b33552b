//! Pharos - 24-Way IR Sensor Jig Display Firmware
//!
//! Main firmware binary for the RP2040 carrier board driving the jig's
//! 32x32 status matrix. Polls the test controller over the synchronous
//! serial link, maps the latest sensor results onto the frame buffer,
//! and scans the buffer out to the panel, round and round, with a
//! watchdog standing behind the whole cycle.
//!
//! Named after the Greek "pharos" (φάρος), the lighthouse of Alexandria -
//! the matrix is the beacon that shows the operator which of the 24
//! sensors under test have passed.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_futures::yield_now;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::spi::{Config as SpiConfig, Spi};
use embassy_rp::watchdog::Watchdog;
use embassy_time::Duration;
use {defmt_rtt as _, panic_probe as _};

use pharos_core::matrix::{apply_all, FrameBuffer};
use pharos_drivers::buttons::ButtonArray;
use pharos_drivers::link::JigLink;
use pharos_drivers::matrix::{MatrixPins, ScanDriver};
use pharos_hal_rp2040::{BusyDelay, RpInput, RpOutput, RpSpiBus};
use pharos_protocol::JigClient;

mod tasks;

/// Watchdog deadline - hardware maximum is 8300 ms
const WATCHDOG_MS: u64 = 8_000;

/// Controller link clock rate
const LINK_FREQUENCY_HZ: u32 = 100_000;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Pharos jig display firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Matrix panel lines
    // Pin assignments are board-specific (jig display carrier rev B)
    let matrix_pins = MatrixPins {
        top_red: RpOutput::new(Output::new(p.PIN_2, Level::Low)),
        top_green: RpOutput::new(Output::new(p.PIN_3, Level::Low)),
        top_blue: RpOutput::new(Output::new(p.PIN_4, Level::Low)),
        bottom_red: RpOutput::new(Output::new(p.PIN_5, Level::Low)),
        bottom_green: RpOutput::new(Output::new(p.PIN_6, Level::Low)),
        bottom_blue: RpOutput::new(Output::new(p.PIN_7, Level::Low)),
        addr_a: RpOutput::new(Output::new(p.PIN_8, Level::Low)),
        addr_b: RpOutput::new(Output::new(p.PIN_9, Level::Low)),
        addr_c: RpOutput::new(Output::new(p.PIN_10, Level::Low)),
        addr_d: RpOutput::new(Output::new(p.PIN_11, Level::Low)),
        clock: RpOutput::new(Output::new(p.PIN_12, Level::Low)),
        latch: RpOutput::new(Output::new(p.PIN_13, Level::Low)),
        output_enable: RpOutput::new(Output::new(p.PIN_14, Level::Low)),
    };

    let delay = BusyDelay::new(embassy_rp::clocks::clk_sys_freq());
    let mut scanner = ScanDriver::new(matrix_pins, delay);
    info!("Matrix scan driver initialized");

    // Controller link on SPI0 (SCK=GPIO18, MOSI=GPIO19, MISO=GPIO16)
    let spi_config = {
        let mut cfg = SpiConfig::default();
        cfg.frequency = LINK_FREQUENCY_HZ;
        cfg
    };
    let spi = Spi::new_blocking(p.SPI0, p.PIN_18, p.PIN_19, p.PIN_16, spi_config);
    let mut link = JigLink::new(RpSpiBus::new(spi));
    info!("Controller link initialized");

    // Front panel buttons SW1..SW4, active-high
    let buttons = ButtonArray::new([
        RpInput::new(Input::new(p.PIN_20, Pull::Down)),
        RpInput::new(Input::new(p.PIN_21, Pull::Down)),
        RpInput::new(Input::new(p.PIN_26, Pull::Down)),
        RpInput::new(Input::new(p.PIN_27, Pull::Down)),
    ]);

    // Set up watchdog before entering the cycle
    let mut watchdog = Watchdog::new(p.WATCHDOG);
    watchdog.start(Duration::from_millis(WATCHDOG_MS));
    info!("Watchdog armed at {} ms", WATCHDOG_MS);

    // Spawn periodic tasks
    spawner.spawn(tasks::tick_task()).unwrap();
    spawner
        .spawn(tasks::heartbeat_task(Output::new(p.PIN_25, Level::Low)))
        .unwrap();

    let mut client = JigClient::new();
    let mut frame = FrameBuffer::new();
    info!("Entering main cycle");

    // Main cycle: exchange (if due), then map, then scan. Strictly in
    // that order, back to back - the frame buffer has exactly one
    // writer (the mapper) and one reader (the scanner) and they never
    // overlap.
    loop {
        client.tick_by(tasks::take_elapsed_ms());

        let button_mask = buttons.read_mask();
        if let Some(exchange) = client.next_exchange(button_mask) {
            match link.send(&exchange) {
                Ok(Some(response)) => {
                    if client.accept_response(&response).is_err() {
                        // Keep the previous results; retry after cooldown
                        warn!("Poll response rejected");
                    }
                }
                Ok(None) => trace!("Notify sent, mask {=u8:b}", button_mask),
                Err(_) => warn!("Link transfer failed"),
            }
        }

        apply_all(&mut frame, client.results(), client.active_position());
        scanner.refresh(&frame);

        watchdog.feed();

        // Let the tick and heartbeat tasks catch up between scans
        yield_now().await;
    }
}
