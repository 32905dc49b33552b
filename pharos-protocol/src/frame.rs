//! Frame encoding and decoding for the jig controller link
//!
//! All frames are fixed-length. The notify frame is two bytes; the poll
//! exchange writes and reads eleven bytes in one full-duplex transfer.
//! Because the response is clocked in while the request is still going
//! out, its first four bytes are bus turnaround noise and are ignored;
//! the controller echoes the sync and command bytes at offsets 4 and 5.

/// Frame synchronization byte
pub const SYNC: u8 = 0x55;

/// "Ready check" poll command byte
pub const CMD_READY_CHECK: u8 = 0x10;

/// Length of the notify frame
pub const NOTIFY_FRAME_LEN: usize = 2;

/// Length of the poll request and response frames
pub const POLL_FRAME_LEN: usize = 11;

// Poll response layout
const RESP_SYNC: usize = 4;
const RESP_CMD: usize = 5;
const RESP_CHECK_STATE: usize = 6;
const RESP_RESULTS_HIGH: usize = 7;
const RESP_RESULTS_MID: usize = 8;
const RESP_RESULTS_LOW: usize = 9;
const RESP_ACTIVE_POS: usize = 10;

/// Mask for the 4-bit button field (SW1..SW4)
pub const BUTTON_MASK_BITS: u8 = 0x0F;

/// Errors that can occur while decoding a poll response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Sync or command byte mismatch in the response header
    HeaderMismatch,
}

/// Encode a button notification frame
///
/// Fire-and-forget: the controller does not reply. The mask carries one
/// bit per button, bit 0 = SW1 .. bit 3 = SW4; higher bits are stripped.
pub fn encode_notify(button_mask: u8) -> [u8; NOTIFY_FRAME_LEN] {
    [SYNC, button_mask & BUTTON_MASK_BITS]
}

/// Encode a ready-check poll request, zero padded to the exchange length
pub fn encode_poll_request() -> [u8; POLL_FRAME_LEN] {
    let mut frame = [0u8; POLL_FRAME_LEN];
    frame[0] = SYNC;
    frame[1] = CMD_READY_CHECK;
    frame
}

/// A validated, decoded poll response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PollResponse {
    /// Controller DAC check state (advisory, unused downstream)
    pub check_state: u8,
    /// 24-bit sensor result bitfield, bit i = sensor i
    pub results: u32,
    /// Index of the sensor slot the controller is currently exercising
    pub active_position: u8,
}

impl PollResponse {
    /// Decode a raw response, accepting it only on a valid header
    ///
    /// Acceptance holds iff byte 4 is the sync byte and byte 5 echoes the
    /// ready-check command. The result bitfield is assembled big-endian
    /// from bytes 7-9.
    pub fn parse(raw: &[u8; POLL_FRAME_LEN]) -> Result<Self, FrameError> {
        if raw[RESP_SYNC] != SYNC || raw[RESP_CMD] != CMD_READY_CHECK {
            return Err(FrameError::HeaderMismatch);
        }

        let results = (u32::from(raw[RESP_RESULTS_HIGH]) << 16)
            | (u32::from(raw[RESP_RESULTS_MID]) << 8)
            | u32::from(raw[RESP_RESULTS_LOW]);

        Ok(Self {
            check_state: raw[RESP_CHECK_STATE],
            results,
            active_position: raw[RESP_ACTIVE_POS],
        })
    }
}
