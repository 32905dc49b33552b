//! Per-sensor screen regions
//!
//! Each of the 24 sensor channels owns a fixed 4-row x 3-column block of
//! cells. The blocks are laid out six to a display quadrant, mirroring the
//! physical arrangement of the sensor carriers on the jig: channels 0-5
//! top-left, 6-11 top-right, 12-17 bottom-left, 18-23 bottom-right, each
//! quadrant filled left to right, then down.
//!
//! This table is static configuration, not computed; editing the display
//! layout means editing the table.

use super::cell::Half;

/// Rows per sensor block
pub const REGION_ROWS: usize = 4;

/// Columns per sensor block
pub const REGION_COLS: usize = 3;

/// One sensor's block of cells, anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Region {
    /// Top row of the block
    pub base_row: u8,
    /// Leftmost column of the block
    pub base_col: u8,
}

impl Region {
    /// The physical half this block's rows fall in
    ///
    /// Every block sits entirely within one half, so the mapper picks a
    /// single color-bit variant for the whole block.
    pub fn half(&self) -> Half {
        Half::of_row(self.base_row as usize)
    }
}

/// Screen region for each sensor channel, indexed by sensor number
pub static REGIONS: [Region; 24] = [
    // Channels 0-5: top-left quadrant
    Region { base_row: 3, base_col: 2 },
    Region { base_row: 3, base_col: 7 },
    Region { base_row: 3, base_col: 12 },
    Region { base_row: 9, base_col: 2 },
    Region { base_row: 9, base_col: 7 },
    Region { base_row: 9, base_col: 12 },
    // Channels 6-11: top-right quadrant
    Region { base_row: 3, base_col: 18 },
    Region { base_row: 3, base_col: 23 },
    Region { base_row: 3, base_col: 28 },
    Region { base_row: 9, base_col: 18 },
    Region { base_row: 9, base_col: 23 },
    Region { base_row: 9, base_col: 28 },
    // Channels 12-17: bottom-left quadrant
    Region { base_row: 19, base_col: 2 },
    Region { base_row: 19, base_col: 7 },
    Region { base_row: 19, base_col: 12 },
    Region { base_row: 25, base_col: 2 },
    Region { base_row: 25, base_col: 7 },
    Region { base_row: 25, base_col: 12 },
    // Channels 18-23: bottom-right quadrant
    Region { base_row: 19, base_col: 18 },
    Region { base_row: 19, base_col: 23 },
    Region { base_row: 19, base_col: 28 },
    Region { base_row: 25, base_col: 18 },
    Region { base_row: 25, base_col: 23 },
    Region { base_row: 25, base_col: 28 },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::cell::{MATRIX_COLS, MATRIX_ROWS};

    #[test]
    fn test_regions_fit_the_matrix() {
        for region in REGIONS.iter() {
            assert!(region.base_row as usize + REGION_ROWS <= MATRIX_ROWS);
            assert!(region.base_col as usize + REGION_COLS <= MATRIX_COLS);
        }
    }

    #[test]
    fn test_regions_stay_within_one_half() {
        for region in REGIONS.iter() {
            let first = Half::of_row(region.base_row as usize);
            let last = Half::of_row(region.base_row as usize + REGION_ROWS - 1);
            assert_eq!(first, last);
            assert_eq!(region.half(), first);
        }
    }

    #[test]
    fn test_regions_do_not_overlap() {
        for (i, a) in REGIONS.iter().enumerate() {
            for b in REGIONS.iter().skip(i + 1) {
                let rows_disjoint = a.base_row as usize + REGION_ROWS <= b.base_row as usize
                    || b.base_row as usize + REGION_ROWS <= a.base_row as usize;
                let cols_disjoint = a.base_col as usize + REGION_COLS <= b.base_col as usize
                    || b.base_col as usize + REGION_COLS <= a.base_col as usize;
                assert!(rows_disjoint || cols_disjoint);
            }
        }
    }
}
