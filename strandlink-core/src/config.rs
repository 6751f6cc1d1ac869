//! Configuration type definitions
//!
//! All settings are compile-time defaults; the original receiver configured
//! the same values as build constants. The pixel count is not here — it is
//! part of the wire contract and lives in `strandlink-protocol`.

use crate::frame::Rgb;

/// Default global brightness limit (0-255), a thermal/current safety margin
pub const DEFAULT_BRIGHTNESS: u8 = 200;

/// Default UART bit rate; must match the sender out-of-band
pub const DEFAULT_BAUDRATE: u32 = 921_600;

/// Default stall timeout for a partially-arrived payload, in milliseconds
pub const DEFAULT_STALL_TIMEOUT_MS: u32 = 100;

/// Channel order of the 3-byte triples on the wire
///
/// A shared build-time convention with the sender, not carried on the wire.
/// A mismatch shows up as swapped colors, never as a framing error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChannelOrder {
    /// red, green, blue
    Rgb,
    /// green, red, blue (what the reference sender emits)
    #[default]
    Grb,
}

impl ChannelOrder {
    /// Interpret one wire triple as a color
    pub fn decode(self, raw: [u8; 3]) -> Rgb {
        match self {
            ChannelOrder::Rgb => Rgb::new(raw[0], raw[1], raw[2]),
            ChannelOrder::Grb => Rgb::new(raw[1], raw[0], raw[2]),
        }
    }
}

/// Color correction profile applied at output time
///
/// Per-channel unity-255 scale factors matching the common FastLED
/// correction presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CorrectionProfile {
    /// No correction
    Uncorrected,
    /// Typical SMD5050 strip (0xFFB0F0)
    #[default]
    TypicalSmd5050,
    /// Typical 8mm pixel string (0xFFE08C)
    TypicalPixelString,
}

impl CorrectionProfile {
    /// Per-channel scale factors for this profile
    pub fn scale(self) -> Rgb {
        match self {
            CorrectionProfile::Uncorrected => Rgb::new(255, 255, 255),
            CorrectionProfile::TypicalSmd5050 => Rgb::new(255, 176, 240),
            CorrectionProfile::TypicalPixelString => Rgb::new(255, 224, 140),
        }
    }
}

/// Bridge configuration
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BridgeConfig {
    /// Global brightness limit (0-255)
    pub brightness: u8,
    /// Output color correction profile
    pub correction: CorrectionProfile,
    /// Wire channel order
    pub order: ChannelOrder,
    /// Color shown during the startup ready sequence
    pub ready_color: Rgb,
    /// Blank hold before the ready color (ms)
    pub ready_blank_ms: u32,
    /// Ready color hold time (ms)
    pub ready_hold_ms: u32,
    /// Abandon a partially-arrived payload after this long with no
    /// progress; `None` waits indefinitely
    pub stall_timeout_ms: Option<u32>,
    /// UART bit rate
    pub baudrate: u32,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            brightness: DEFAULT_BRIGHTNESS,
            correction: CorrectionProfile::default(),
            order: ChannelOrder::default(),
            ready_color: Rgb::BLUE,
            ready_blank_ms: 500,
            ready_hold_ms: 1000,
            stall_timeout_ms: Some(DEFAULT_STALL_TIMEOUT_MS),
            baudrate: DEFAULT_BAUDRATE,
        }
    }
}
