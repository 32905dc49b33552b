//! Jig button array
//!
//! Four momentary, active-high buttons (SW1..SW4) sampled once per main
//! cycle. No debouncing here: the 500 ms notify cooldown already swallows
//! contact bounce, and the controller treats the mask as level data.

use pharos_hal::InputPin;

/// Number of buttons on the jig front panel
pub const BUTTON_COUNT: usize = 4;

/// The four panel buttons, SW1 first
pub struct ButtonArray<P: InputPin> {
    pins: [P; BUTTON_COUNT],
}

impl<P: InputPin> ButtonArray<P> {
    /// Wrap the button input pins, ordered SW1..SW4
    pub fn new(pins: [P; BUTTON_COUNT]) -> Self {
        Self { pins }
    }

    /// Sample all buttons into a 4-bit mask, bit 0 = SW1 .. bit 3 = SW4
    pub fn read_mask(&self) -> u8 {
        let mut mask = 0;
        for (i, pin) in self.pins.iter().enumerate() {
            if pin.is_high() {
                mask |= 1 << i;
            }
        }
        mask
    }
}
