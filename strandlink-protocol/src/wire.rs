//! Wire format constants and frame encoding.
//!
//! Frame layout:
//! - MARKER_1 (1 byte): 0xAA
//! - MARKER_2 (1 byte): 0x55
//! - PAYLOAD (LED_COUNT * 3 bytes): one 3-byte color triple per pixel, in
//!   strand order, channel order per the out-of-band convention
//!
//! The payload length is not carried on the wire; sender and receiver agree
//! on [`LED_COUNT`] at build time.

/// First frame marker byte
pub const MARKER_1: u8 = 0xAA;

/// Second frame marker byte
pub const MARKER_2: u8 = 0x55;

/// Marker length in bytes
pub const MARKER_LEN: usize = 2;

/// Number of addressable pixels per frame (shared build-time constant)
pub const LED_COUNT: usize = 900;

/// Bytes per pixel (three 8-bit intensity channels)
pub const BYTES_PER_PIXEL: usize = 3;

/// Payload length of a single frame
pub const PAYLOAD_LEN: usize = LED_COUNT * BYTES_PER_PIXEL;

/// Complete frame length (marker + payload)
pub const FRAME_LEN: usize = MARKER_LEN + PAYLOAD_LEN;

/// Errors that can occur during frame encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WireError {
    /// Payload is not exactly PAYLOAD_LEN bytes
    PayloadLengthMismatch,
    /// Output buffer too small for a complete frame
    BufferTooSmall,
}

/// Encode one complete frame into a byte buffer.
///
/// The receiver never calls this; it exists for the sender side of the link
/// and for building test vectors. Returns the number of bytes written
/// (always [`FRAME_LEN`] on success).
pub fn encode_frame(payload: &[u8], buffer: &mut [u8]) -> Result<usize, WireError> {
    if payload.len() != PAYLOAD_LEN {
        return Err(WireError::PayloadLengthMismatch);
    }
    if buffer.len() < FRAME_LEN {
        return Err(WireError::BufferTooSmall);
    }

    buffer[0] = MARKER_1;
    buffer[1] = MARKER_2;
    buffer[MARKER_LEN..FRAME_LEN].copy_from_slice(payload);

    Ok(FRAME_LEN)
}
