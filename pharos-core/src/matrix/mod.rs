//! Dual-scan LED matrix model
//!
//! The jig's status display is a 32x32 dual-color matrix scanned as a
//! dual-scan panel: physical row `r` and row `r + 16` share one address
//! line pair and are lit together, distinguished only by which RGB
//! sub-triplet carries their color data. Every pixel is a 16-bit cell
//! combining the row's address bits with one color-enable bit per half.

pub mod buffer;
pub mod cell;
pub mod mapper;
pub mod regions;

pub use buffer::FrameBuffer;
pub use cell::{Cell, Color, Half, MATRIX_COLS, MATRIX_ROWS, ROW_ADDRESS};
pub use mapper::{apply, apply_all, SensorResult, SENSOR_COUNT};
pub use regions::{Region, REGIONS, REGION_COLS, REGION_ROWS};
