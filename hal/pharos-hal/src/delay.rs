//! Busy-wait delay abstraction
//!
//! The shift-register chain behind the matrix has setup/hold requirements
//! on the order of a microsecond, and each scanned row is held lit for a
//! fixed dwell. Both are far below any scheduler tick, so they are plain
//! busy-waits behind this trait.

/// Microsecond-resolution busy-wait delay
pub trait DelayUs {
    /// Block for at least `us` microseconds
    ///
    /// The delay may be longer than requested but never shorter; the scan
    /// driver relies on the minimum for shift-register timing margins.
    fn delay_us(&mut self, us: u32);
}
