//! Cell encoding for one matrix pixel
//!
//! Each cell is a 16-bit value with two independent bit groups:
//!
//! - bits 0-3: row-address bits, taken verbatim from [`ROW_ADDRESS`]
//! - bits 4-9: color-enable bits, one per line
//!   (top-red, top-green, top-blue, bottom-red, bottom-green, bottom-blue)
//!
//! The address bits select which scan row pair the cell belongs to; only
//! the color bits vary per column. There is no true "off" encoding - an
//! idle pixel is the blue bit of its half, so a freshly reset display
//! shows an all-blue field.

/// Number of physical rows in the matrix
pub const MATRIX_ROWS: usize = 32;

/// Number of columns in the matrix
pub const MATRIX_COLS: usize = 32;

// Color-enable bit positions (bits 4-9)
const TOP_RED: u16 = 1 << 4;
const TOP_GREEN: u16 = 1 << 5;
const TOP_BLUE: u16 = 1 << 6;
const BOTTOM_RED: u16 = 1 << 7;
const BOTTOM_GREEN: u16 = 1 << 8;
const BOTTOM_BLUE: u16 = 1 << 9;

const ADDRESS_MASK: u16 = 0x000F;
const COLOR_MASK: u16 = 0x03F0;

/// Row-address values, indexed by physical row
///
/// (MSB) BIT_D, BIT_C, BIT_B, BIT_A (LSB). The top half (rows 0-15) and
/// bottom half (rows 16-31) roll through the same 0-15 address space:
/// the panel lights row `r` and row `r + 16` together on one address.
pub static ROW_ADDRESS: [u16; MATRIX_ROWS] = [
    0b0000, 0b0001, 0b0010, 0b0011, // Rows 0-3
    0b0100, 0b0101, 0b0110, 0b0111, // Rows 4-7
    0b1000, 0b1001, 0b1010, 0b1011, // Rows 8-11
    0b1100, 0b1101, 0b1110, 0b1111, // Rows 12-15
    0b0000, 0b0001, 0b0010, 0b0011, // Rows 16-19
    0b0100, 0b0101, 0b0110, 0b0111, // Rows 20-23
    0b1000, 0b1001, 0b1010, 0b1011, // Rows 24-27
    0b1100, 0b1101, 0b1110, 0b1111, // Rows 28-31
];

/// Which half of the dual-scan pair a row belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Half {
    /// Rows 0-15, driven by the top RGB lines
    Top,
    /// Rows 16-31, driven by the bottom RGB lines
    Bottom,
}

impl Half {
    /// The half a physical row falls in
    pub fn of_row(row: usize) -> Self {
        debug_assert!(row < MATRIX_ROWS);
        if row < MATRIX_ROWS / 2 {
            Half::Top
        } else {
            Half::Bottom
        }
    }
}

/// Displayable colors
///
/// Blue doubles as the idle/pending indicator; there is no blank state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    Red,
    Green,
    Blue,
}

impl Color {
    /// The color-enable bit for this color in the given half
    fn bit(self, half: Half) -> u16 {
        match (half, self) {
            (Half::Top, Color::Red) => TOP_RED,
            (Half::Top, Color::Green) => TOP_GREEN,
            (Half::Top, Color::Blue) => TOP_BLUE,
            (Half::Bottom, Color::Red) => BOTTOM_RED,
            (Half::Bottom, Color::Green) => BOTTOM_GREEN,
            (Half::Bottom, Color::Blue) => BOTTOM_BLUE,
        }
    }
}

/// One encoded matrix pixel
///
/// Invariant: the address bits always equal `ROW_ADDRESS[row]` for the
/// cell's row; constructors enforce this and nothing else mutates cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cell(u16);

impl Cell {
    /// The idle encoding for a row: address bits plus the blue bit of
    /// the row's own half
    ///
    /// Row indexes outside 0-31 are a programming error; the matrix
    /// geometry is fixed.
    pub fn idle(row: usize) -> Self {
        Self::colored(row, Half::of_row(row), Color::Blue)
    }

    /// Address bits for `row` plus exactly one color bit for `half`
    ///
    /// The half is passed explicitly rather than derived from the row:
    /// a cell shifted out while row `r` is addressed lights row `r` via
    /// the top lines and row `r + 16` via the bottom lines.
    pub fn colored(row: usize, half: Half, color: Color) -> Self {
        debug_assert!(row < MATRIX_ROWS);
        Cell(ROW_ADDRESS[row] | color.bit(half))
    }

    /// Raw 16-bit encoding
    pub fn raw(self) -> u16 {
        self.0
    }

    /// The row-address bit group (bits 0-3)
    pub fn row_address(self) -> u16 {
        self.0 & ADDRESS_MASK
    }

    /// The color-enable bit group (bits 4-9)
    pub fn color_bits(self) -> u16 {
        self.0 & COLOR_MASK
    }

    /// State of one address line (0 = A .. 3 = D)
    pub fn address_bit(self, line: u8) -> bool {
        debug_assert!(line < 4);
        self.0 & (1 << line) != 0
    }

    /// Whether the red line of `half` is enabled
    pub fn red(self, half: Half) -> bool {
        self.0 & Color::Red.bit(half) != 0
    }

    /// Whether the green line of `half` is enabled
    pub fn green(self, half: Half) -> bool {
        self.0 & Color::Green.bit(half) != 0
    }

    /// Whether the blue line of `half` is enabled
    pub fn blue(self, half: Half) -> bool {
        self.0 & Color::Blue.bit(half) != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_idle_uses_row_half_blue() {
        // Top half rows idle on the top blue line
        let top = Cell::idle(3);
        assert!(top.blue(Half::Top));
        assert!(!top.blue(Half::Bottom));
        assert!(!top.red(Half::Top) && !top.green(Half::Top));

        // Bottom half rows idle on the bottom blue line
        let bottom = Cell::idle(20);
        assert!(bottom.blue(Half::Bottom));
        assert!(!bottom.blue(Half::Top));
    }

    #[test]
    fn test_row_address_rolls_over_at_half() {
        // Rows r and r + 16 share one address
        for row in 0..MATRIX_ROWS / 2 {
            assert_eq!(ROW_ADDRESS[row], row as u16);
            assert_eq!(ROW_ADDRESS[row + 16], ROW_ADDRESS[row]);
        }
    }

    #[test]
    fn test_exactly_one_color_bit() {
        for &color in &[Color::Red, Color::Green, Color::Blue] {
            for &half in &[Half::Top, Half::Bottom] {
                let cell = Cell::colored(0, half, color);
                assert_eq!(cell.color_bits().count_ones(), 1);
            }
        }
    }

    #[test]
    fn test_address_lines_match_table() {
        let cell = Cell::colored(13, Half::Top, Color::Red);
        // Row 13 = 0b1101
        assert!(cell.address_bit(0));
        assert!(!cell.address_bit(1));
        assert!(cell.address_bit(2));
        assert!(cell.address_bit(3));
    }

    proptest! {
        /// Address bits are unchanged by color selection, for every row
        #[test]
        fn prop_address_color_separation(row in 0usize..MATRIX_ROWS) {
            let idle = Cell::idle(row);
            prop_assert_eq!(idle.row_address(), ROW_ADDRESS[row]);

            for &color in &[Color::Red, Color::Green, Color::Blue] {
                for &half in &[Half::Top, Half::Bottom] {
                    let cell = Cell::colored(row, half, color);
                    prop_assert_eq!(cell.row_address(), ROW_ADDRESS[row]);
                    // Color bits never leak into the address group
                    prop_assert_eq!(cell.raw(), cell.row_address() | cell.color_bits());
                }
            }
        }
    }
}
