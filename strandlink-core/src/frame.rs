//! Pixel and frame buffer types.
//!
//! The frame buffer holds one complete frame's payload exactly as it
//! arrived on the wire. Channel-order interpretation, color correction, and
//! brightness are output concerns applied by the strip driver; the buffer
//! itself never reorders or rescales anything.

use strandlink_protocol::wire::{BYTES_PER_PIXEL, LED_COUNT, PAYLOAD_LEN};

/// One pixel's color as three 8-bit intensity channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// All channels off
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    /// Full blue, the default "ready" indicator color
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Scale each channel by the matching channel of `by` (255 = unity).
    pub fn scale(self, by: Rgb) -> Rgb {
        Rgb::new(
            scale_channel(self.r, by.r),
            scale_channel(self.g, by.g),
            scale_channel(self.b, by.b),
        )
    }

    /// Scale all channels by a single brightness level (255 = full).
    pub fn dim(self, level: u8) -> Rgb {
        Rgb::new(
            scale_channel(self.r, level),
            scale_channel(self.g, level),
            scale_channel(self.b, level),
        )
    }
}

fn scale_channel(value: u8, scale: u8) -> u8 {
    (value as u16 * scale as u16 / 255) as u8
}

/// The one frame buffer: exactly [`LED_COUNT`] pixels of raw wire bytes.
///
/// Exclusively owned by the receiver and overwritten in place as a single
/// bulk transfer of [`PAYLOAD_LEN`] bytes; it is never partially updated,
/// so the strip only ever sees complete frames.
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    bytes: [u8; PAYLOAD_LEN],
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    /// Create a zeroed (all-black) frame buffer
    pub const fn new() -> Self {
        Self {
            bytes: [0; PAYLOAD_LEN],
        }
    }

    /// Number of pixels in the frame
    pub const fn len(&self) -> usize {
        LED_COUNT
    }

    pub const fn is_empty(&self) -> bool {
        LED_COUNT == 0
    }

    /// Raw payload bytes in wire order
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Mutable view for the bulk payload transfer
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    /// The raw 3-byte channel triple for one pixel
    ///
    /// # Panics
    ///
    /// Panics if `index >= LED_COUNT`.
    pub fn pixel_bytes(&self, index: usize) -> [u8; BYTES_PER_PIXEL] {
        let offset = index * BYTES_PER_PIXEL;
        [
            self.bytes[offset],
            self.bytes[offset + 1],
            self.bytes[offset + 2],
        ]
    }

    /// Iterate over all pixels as raw channel triples, in strand order
    pub fn pixels(&self) -> impl Iterator<Item = [u8; BYTES_PER_PIXEL]> + '_ {
        self.bytes.chunks_exact(BYTES_PER_PIXEL).map(|chunk| {
            let mut triple = [0u8; BYTES_PER_PIXEL];
            triple.copy_from_slice(chunk);
            triple
        })
    }
}
