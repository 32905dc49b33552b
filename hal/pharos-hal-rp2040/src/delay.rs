//! Cycle-counted busy-wait delays
//!
//! The scan driver's clock pulses are a single microsecond, well below
//! anything the timer peripheral can schedule usefully, so delays are
//! counted core cycles.

use pharos_hal::DelayUs;

/// Busy-wait delay provider calibrated to the core clock
#[derive(Debug, Clone, Copy)]
pub struct BusyDelay {
    cycles_per_us: u32,
}

impl BusyDelay {
    /// Calibrate to the given core clock frequency
    ///
    /// The RP2040 default is 125 MHz; pass the actual configured clock
    /// if it differs.
    pub fn new(core_hz: u32) -> Self {
        Self {
            cycles_per_us: core_hz / 1_000_000,
        }
    }
}

impl DelayUs for BusyDelay {
    fn delay_us(&mut self, us: u32) {
        // asm::delay guarantees at least the requested cycle count
        cortex_m::asm::delay(self.cycles_per_us.saturating_mul(us));
    }
}
