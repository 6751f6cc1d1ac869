//! LED strip output capability.

use crate::config::CorrectionProfile;
use crate::frame::{FrameBuffer, Rgb};

/// Errors that can occur driving the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StripError {
    /// Pixel index beyond the end of the strand
    InvalidIndex,
    /// Underlying output transport failed
    Bus,
}

/// Write-only, fire-and-forget LED strip driver.
///
/// The receive loop is the only writer. `fill` and `set_pixel` take logical
/// colors; `write_frame` takes raw wire bytes and the implementation applies
/// the configured channel order, color correction, and brightness at output
/// time. Nothing reaches the physical strand until [`refresh`](Self::refresh).
pub trait LedStrip {
    /// Set every pixel to one color
    fn fill(&mut self, color: Rgb) -> Result<(), StripError>;

    /// Set a single pixel
    fn set_pixel(&mut self, index: usize, color: Rgb) -> Result<(), StripError>;

    /// Bulk-load a complete frame of wire data
    fn write_frame(&mut self, frame: &FrameBuffer) -> Result<(), StripError>;

    /// Push the current contents to the physical strand
    fn refresh(&mut self) -> Result<(), StripError>;

    /// Set the global brightness limit (255 = full)
    fn set_brightness(&mut self, level: u8);

    /// Set the output color correction profile
    fn set_correction(&mut self, profile: CorrectionProfile);
}
