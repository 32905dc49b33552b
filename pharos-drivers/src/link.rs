//! Jig controller link
//!
//! Puts protocol exchanges on the synchronous serial bus. The display
//! board is the sole bus master, so every transfer is bounded by its
//! fixed byte count and the bus clock; nothing here waits on the remote
//! side.

use pharos_hal::SpiBus;
use pharos_protocol::{Exchange, POLL_FRAME_LEN};

/// The serial link to the jig's test controller
pub struct JigLink<B: SpiBus> {
    bus: B,
}

impl<B: SpiBus> JigLink<B> {
    /// Wrap the bus
    pub fn new(bus: B) -> Self {
        Self { bus }
    }

    /// Transmit one exchange
    ///
    /// Notify frames are write-only and yield `None`. Poll frames are a
    /// combined write+read; the raw 11-byte response comes back for the
    /// protocol client to validate - a garbled response is its problem,
    /// only bus-level failures surface here.
    pub fn send(&mut self, exchange: &Exchange) -> Result<Option<[u8; POLL_FRAME_LEN]>, B::Error> {
        match exchange {
            Exchange::Notify(frame) => {
                self.bus.write(frame)?;
                Ok(None)
            }
            Exchange::Poll(frame) => {
                let mut response = [0u8; POLL_FRAME_LEN];
                self.bus.transfer(&mut response, frame)?;
                Ok(Some(response))
            }
        }
    }
}
