//! Sensor-result to screen-region mapper
//!
//! Pure mapping from (sensor index, result, active test position) into a
//! block of colored cells in the frame buffer. The mapper only ever
//! writes the buffer, so write order within a cycle does not matter.

use super::buffer::FrameBuffer;
use super::cell::{Cell, Color};
use super::regions::{REGIONS, REGION_COLS, REGION_ROWS};

/// Number of sensor channels on the jig
pub const SENSOR_COUNT: usize = 24;

/// Tri-state result for one sensor channel
///
/// `Checking` renders identically to a not-yet-reached slot (blue). The
/// controller cannot currently report an in-progress state distinct from
/// "not reached", but the variant is kept so the link can grow one
/// without touching the mapper's callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorResult {
    Fail,
    Pass,
    Checking,
}

impl SensorResult {
    /// Result for `sensor` latched from the controller's 24-bit bitfield
    ///
    /// Bit i set means sensor i passed. Whether the bit is meaningful yet
    /// is decided by the active-position gate in [`apply`], not here.
    pub fn from_bitfield(bits: u32, sensor: usize) -> Self {
        debug_assert!(sensor < SENSOR_COUNT);
        if bits & (1 << sensor) != 0 {
            SensorResult::Pass
        } else {
            SensorResult::Fail
        }
    }
}

/// Write one sensor's result into its screen region
///
/// The result bitfield is only meaningful up to the jig's current scan
/// position: a sensor whose slot has not been reached yet must not show a
/// stale zero bit as a false failure, so anything at a position past
/// `active_position` is forced to the idle color.
///
/// - `Fail` with `active_position >= sensor`: red block
/// - `Pass` with `active_position >= sensor`: green block
/// - everything else (including `Checking`): blue block
pub fn apply(
    buffer: &mut FrameBuffer,
    sensor: usize,
    result: SensorResult,
    active_position: u8,
) {
    debug_assert!(sensor < SENSOR_COUNT);
    let region = &REGIONS[sensor];

    let reached = active_position as usize >= sensor;
    let color = match (result, reached) {
        (SensorResult::Fail, true) => Color::Red,
        (SensorResult::Pass, true) => Color::Green,
        _ => Color::Blue,
    };

    let half = region.half();
    for dr in 0..REGION_ROWS {
        let row = region.base_row as usize + dr;
        let cell = Cell::colored(row, half, color);
        for dc in 0..REGION_COLS {
            buffer.set(row, region.base_col as usize + dc, cell);
        }
    }
}

/// Write all 24 sensor results from the latest poll into the buffer
///
/// Full-frame overwrite, once per main cycle, before the scan driver
/// runs. There is no incremental update path.
pub fn apply_all(buffer: &mut FrameBuffer, results: u32, active_position: u8) {
    for sensor in 0..SENSOR_COUNT {
        apply(
            buffer,
            sensor,
            SensorResult::from_bitfield(results, sensor),
            active_position,
        );
    }
}
