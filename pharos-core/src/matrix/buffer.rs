//! The 32x32 frame buffer
//!
//! Owns the current display state as encoded cells. Created once at
//! startup, fully idle-initialized, then overwritten in place every main
//! cycle by the mapper and serialized by the scan driver. It is never
//! resized and lives for the whole process.

use super::cell::{Cell, MATRIX_COLS, MATRIX_ROWS};

/// Ordered 32x32 mapping from (row, column) to [`Cell`]
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    cells: [[Cell; MATRIX_COLS]; MATRIX_ROWS],
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    /// Create a buffer with every cell in its row's idle encoding
    pub fn new() -> Self {
        let mut buffer = Self {
            cells: [[Cell::default(); MATRIX_COLS]; MATRIX_ROWS],
        };
        buffer.reset_to_idle();
        buffer
    }

    /// Fill every cell with its row's idle encoding
    ///
    /// Rows 0-15 idle on the top blue line, rows 16-31 on the bottom
    /// blue line. Idempotent; writes are total, no partial state exists.
    pub fn reset_to_idle(&mut self) {
        for (row, cells) in self.cells.iter_mut().enumerate() {
            let idle = Cell::idle(row);
            for cell in cells.iter_mut() {
                *cell = idle;
            }
        }
    }

    /// Overwrite one cell
    ///
    /// Out-of-range indices are a programming error; the geometry is fixed.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        debug_assert!(row < MATRIX_ROWS && col < MATRIX_COLS);
        self.cells[row][col] = cell;
    }

    /// Read one cell
    pub fn get(&self, row: usize, col: usize) -> Cell {
        debug_assert!(row < MATRIX_ROWS && col < MATRIX_COLS);
        self.cells[row][col]
    }

    /// One full row of cells, in column order
    ///
    /// The scan driver shifts rows out through this accessor.
    pub fn row(&self, row: usize) -> &[Cell; MATRIX_COLS] {
        debug_assert!(row < MATRIX_ROWS);
        &self.cells[row]
    }
}
