//! Synchronous serial bus abstractions
//!
//! The jig controller link is a master-initiated, full-duplex synchronous
//! serial bus clocked at roughly 100 kHz. Every exchange has a fixed byte
//! count, so only blocking write and combined write+read operations are
//! needed; there is no stream-oriented read path.

/// Synchronous serial bus master
pub trait SpiBus {
    /// Error type for bus operations
    type Error;

    /// Write data without reading the returned bytes
    ///
    /// Used for fire-and-forget frames (button notifications).
    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Transfer data (simultaneous write and read)
    ///
    /// Writes data from `write` while reading into `read`. Both buffers
    /// must be the same length. Used for the poll request/response
    /// exchange, which clocks the response in while the request goes out.
    fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), Self::Error>;
}
