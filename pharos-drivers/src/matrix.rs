//! Matrix scan driver
//!
//! Serializes the frame buffer onto the dual-scan panel once per refresh
//! call. For each of the 32 rows: blank the output, open the latch, shift
//! the row's 32 cells through the color and address lines with a clock
//! pulse per cell, close the latch to commit the row, then light it for a
//! fixed dwell before moving on.
//!
//! One full refresh is about 32 x (32 x ~2us + 450us) = 16.4 ms (~61 Hz),
//! which bounds how quickly the display reacts to new sensor results.

use pharos_core::matrix::{Cell, FrameBuffer, Half, MATRIX_ROWS};
use pharos_hal::{DelayUs, OutputPin};

/// Minimum shift clock high time
///
/// Matches the shift-register chain's setup/hold requirement; shortening
/// it corrupts the shifted data, it is not a tuning knob.
pub const CLOCK_PULSE_WIDTH_US: u32 = 1;

/// Hold time a latched row stays lit before the next row is scanned
///
/// This is the persistence-of-vision interval: shorter flickers, longer
/// lowers the refresh rate and skews brightness toward later rows.
pub const ROW_DWELL_US: u32 = 450;

/// The thirteen output lines driving the panel
///
/// Six color-enable lines (one per RGB line per half), four row-address
/// lines, shift clock, latch, and output-enable. Output-enable is
/// active-high at this interface.
pub struct MatrixPins<P: OutputPin> {
    pub top_red: P,
    pub top_green: P,
    pub top_blue: P,
    pub bottom_red: P,
    pub bottom_green: P,
    pub bottom_blue: P,
    pub addr_a: P,
    pub addr_b: P,
    pub addr_c: P,
    pub addr_d: P,
    pub clock: P,
    pub latch: P,
    pub output_enable: P,
}

/// Row/column multiplexed scan driver
///
/// Unconditional and infallible: apart from the timed busy-waits nothing
/// here can block or fail short of losing power or clock.
pub struct ScanDriver<P: OutputPin, D: DelayUs> {
    pins: MatrixPins<P>,
    delay: D,
}

impl<P: OutputPin, D: DelayUs> ScanDriver<P, D> {
    /// Take ownership of the panel lines, leaving the display blanked
    pub fn new(mut pins: MatrixPins<P>, delay: D) -> Self {
        pins.output_enable.set_low();
        pins.clock.set_low();
        pins.latch.set_low();
        Self { pins, delay }
    }

    /// Scan the whole buffer onto the panel once
    pub fn refresh(&mut self, frame: &FrameBuffer) {
        for row in 0..MATRIX_ROWS {
            self.pins.output_enable.set_low();
            self.pins.latch.set_high();

            for &cell in frame.row(row).iter() {
                self.drive_lines(cell);
                self.pins.clock.set_high();
                self.delay.delay_us(CLOCK_PULSE_WIDTH_US);
                self.pins.clock.set_low();
            }

            // Falling latch edge commits the shifted row to the drivers
            self.pins.latch.set_low();
            self.pins.output_enable.set_high();
            self.delay.delay_us(ROW_DWELL_US);
        }
        self.pins.output_enable.set_low();
    }

    /// Present one cell's bits on the color and address lines
    fn drive_lines(&mut self, cell: Cell) {
        self.pins.top_red.set_state(cell.red(Half::Top));
        self.pins.top_green.set_state(cell.green(Half::Top));
        self.pins.top_blue.set_state(cell.blue(Half::Top));
        self.pins.bottom_red.set_state(cell.red(Half::Bottom));
        self.pins.bottom_green.set_state(cell.green(Half::Bottom));
        self.pins.bottom_blue.set_state(cell.blue(Half::Bottom));
        self.pins.addr_a.set_state(cell.address_bit(0));
        self.pins.addr_b.set_state(cell.address_bit(1));
        self.pins.addr_c.set_state(cell.address_bit(2));
        self.pins.addr_d.set_state(cell.address_bit(3));
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::rc::Rc;
    use std::vec::Vec;

    use core::cell::RefCell;

    use super::*;
    use pharos_core::matrix::{Color, MATRIX_COLS, ROW_ADDRESS};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Line {
        TopRed,
        TopGreen,
        TopBlue,
        BottomRed,
        BottomGreen,
        BottomBlue,
        AddrA,
        AddrB,
        AddrC,
        AddrD,
        Clock,
        Latch,
        OutputEnable,
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Event {
        Set(Line, bool),
        Delay(u32),
    }

    type Trace = Rc<RefCell<Vec<Event>>>;

    struct MockPin {
        line: Line,
        high: bool,
        trace: Trace,
    }

    impl MockPin {
        fn new(line: Line, trace: &Trace) -> Self {
            Self {
                line,
                high: false,
                trace: trace.clone(),
            }
        }
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            self.high = true;
            self.trace.borrow_mut().push(Event::Set(self.line, true));
        }

        fn set_low(&mut self) {
            self.high = false;
            self.trace.borrow_mut().push(Event::Set(self.line, false));
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    struct MockDelay {
        trace: Trace,
    }

    impl DelayUs for MockDelay {
        fn delay_us(&mut self, us: u32) {
            self.trace.borrow_mut().push(Event::Delay(us));
        }
    }

    fn driver_with_trace() -> (ScanDriver<MockPin, MockDelay>, Trace) {
        let trace: Trace = Rc::new(RefCell::new(Vec::new()));
        let pins = MatrixPins {
            top_red: MockPin::new(Line::TopRed, &trace),
            top_green: MockPin::new(Line::TopGreen, &trace),
            top_blue: MockPin::new(Line::TopBlue, &trace),
            bottom_red: MockPin::new(Line::BottomRed, &trace),
            bottom_green: MockPin::new(Line::BottomGreen, &trace),
            bottom_blue: MockPin::new(Line::BottomBlue, &trace),
            addr_a: MockPin::new(Line::AddrA, &trace),
            addr_b: MockPin::new(Line::AddrB, &trace),
            addr_c: MockPin::new(Line::AddrC, &trace),
            addr_d: MockPin::new(Line::AddrD, &trace),
            clock: MockPin::new(Line::Clock, &trace),
            latch: MockPin::new(Line::Latch, &trace),
            output_enable: MockPin::new(Line::OutputEnable, &trace),
        };
        let delay = MockDelay {
            trace: trace.clone(),
        };
        let driver = ScanDriver::new(pins, delay);
        // Discard the construction-time blanking events
        trace.borrow_mut().clear();
        (driver, trace)
    }

    /// Replay the trace, calling `observe` with the current line states
    /// at every clock rising edge and every dwell delay.
    fn replay<F>(trace: &[Event], mut observe: F)
    where
        F: FnMut(&dyn Fn(Line) -> bool, Option<u32>),
    {
        let mut states = std::collections::HashMap::new();
        for event in trace {
            match *event {
                Event::Set(line, high) => {
                    let rising_clock = line == Line::Clock
                        && high
                        && !states.get(&Line::Clock).copied().unwrap_or(false);
                    states.insert(line, high);
                    if rising_clock {
                        let lookup = |l: Line| states.get(&l).copied().unwrap_or(false);
                        observe(&lookup, None);
                    }
                }
                Event::Delay(us) => {
                    let lookup = |l: Line| states.get(&l).copied().unwrap_or(false);
                    observe(&lookup, Some(us));
                }
            }
        }
    }

    #[test]
    fn test_refresh_clocks_every_cell_once() {
        let (mut driver, trace) = driver_with_trace();
        driver.refresh(&FrameBuffer::new());

        let mut pulses = 0usize;
        replay(&trace.borrow(), |_, delay| {
            if delay.is_none() {
                pulses += 1;
            }
        });
        assert_eq!(pulses, MATRIX_ROWS * MATRIX_COLS);
    }

    #[test]
    fn test_rows_scanned_in_order() {
        let (mut driver, trace) = driver_with_trace();
        driver.refresh(&FrameBuffer::new());

        // At every clock pulse the address lines must decode to the row
        // being shifted, in row-major order.
        let mut pulse = 0usize;
        replay(&trace.borrow(), |lines, delay| {
            if delay.is_some() {
                return;
            }
            let row = pulse / MATRIX_COLS;
            let address = u16::from(lines(Line::AddrA))
                | u16::from(lines(Line::AddrB)) << 1
                | u16::from(lines(Line::AddrC)) << 2
                | u16::from(lines(Line::AddrD)) << 3;
            assert_eq!(address, ROW_ADDRESS[row], "pulse {pulse}");
            pulse += 1;
        });
        assert_eq!(pulse, MATRIX_ROWS * MATRIX_COLS);
    }

    #[test]
    fn test_output_disabled_while_shifting_enabled_during_dwell() {
        let (mut driver, trace) = driver_with_trace();
        driver.refresh(&FrameBuffer::new());

        replay(&trace.borrow(), |lines, delay| {
            match delay {
                // Clock pulses and their width delays happen blanked
                None => assert!(!lines(Line::OutputEnable)),
                Some(CLOCK_PULSE_WIDTH_US) => assert!(!lines(Line::OutputEnable)),
                // The dwell is the only time the row is lit
                Some(ROW_DWELL_US) => assert!(lines(Line::OutputEnable)),
                Some(other) => panic!("unexpected delay of {other}us"),
            }
        });
    }

    #[test]
    fn test_latch_commits_before_dwell() {
        let (mut driver, trace) = driver_with_trace();
        driver.refresh(&FrameBuffer::new());

        // Latch is held high for the whole shift and dropped before the
        // row is lit.
        replay(&trace.borrow(), |lines, delay| match delay {
            None => assert!(lines(Line::Latch)),
            Some(ROW_DWELL_US) => assert!(!lines(Line::Latch)),
            _ => {}
        });
    }

    #[test]
    fn test_clock_pulse_meets_minimum_width() {
        let (mut driver, trace) = driver_with_trace();
        driver.refresh(&FrameBuffer::new());

        // Every clock rising edge is followed by the width delay and then
        // the falling edge, with nothing in between.
        let events = trace.borrow();
        for (i, window) in events.windows(3).enumerate() {
            if window[0] == Event::Set(Line::Clock, true) {
                assert_eq!(window[1], Event::Delay(CLOCK_PULSE_WIDTH_US), "edge {i}");
                assert_eq!(window[2], Event::Set(Line::Clock, false), "edge {i}");
            }
        }
    }

    #[test]
    fn test_color_lines_follow_the_buffer() {
        let (mut driver, trace) = driver_with_trace();

        let mut frame = FrameBuffer::new();
        frame.set(0, 5, Cell::colored(0, Half::Top, Color::Red));
        driver.refresh(&frame);

        let mut pulse = 0usize;
        replay(&trace.borrow(), |lines, delay| {
            if delay.is_some() {
                return;
            }
            if pulse / MATRIX_COLS == 0 {
                let col = pulse % MATRIX_COLS;
                assert_eq!(lines(Line::TopRed), col == 5, "col {col}");
                assert_eq!(lines(Line::TopBlue), col != 5, "col {col}");
                // Idle rows never drive the bottom lines of the top half
                assert!(!lines(Line::BottomRed));
            }
            pulse += 1;
        });
    }

    #[test]
    fn test_display_blanked_after_refresh() {
        let (mut driver, trace) = driver_with_trace();
        driver.refresh(&FrameBuffer::new());

        let last_oe = trace
            .borrow()
            .iter()
            .rev()
            .find_map(|e| match e {
                Event::Set(Line::OutputEnable, high) => Some(*high),
                _ => None,
            })
            .unwrap();
        assert!(!last_oe);
    }
}
