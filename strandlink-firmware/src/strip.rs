//! WS2812 strip driver over the RP2040 PIO.
//!
//! Maintains a local color array and pushes it to the strand via the PIO
//! DMA driver on refresh. Channel order, color correction, and the global
//! brightness limit are applied here, at output time; the frame buffer
//! upstream always holds raw wire bytes.

use embassy_futures::block_on;
use embassy_rp::pio::Instance;
use embassy_rp::pio_programs::ws2812::PioWs2812;
use smart_leds::RGB8;

use strandlink_core::config::{BridgeConfig, ChannelOrder, CorrectionProfile};
use strandlink_core::frame::{FrameBuffer, Rgb};
use strandlink_core::traits::{LedStrip, StripError};
use strandlink_protocol::LED_COUNT;

pub struct Ws2812Strip<'d, P: Instance, const S: usize> {
    driver: PioWs2812<'d, P, S, LED_COUNT>,
    colors: [RGB8; LED_COUNT],
    brightness: u8,
    correction: CorrectionProfile,
    order: ChannelOrder,
}

impl<'d, P: Instance, const S: usize> Ws2812Strip<'d, P, S> {
    pub fn new(driver: PioWs2812<'d, P, S, LED_COUNT>, config: &BridgeConfig) -> Self {
        Self {
            driver,
            colors: [RGB8::new(0, 0, 0); LED_COUNT],
            brightness: config.brightness,
            correction: config.correction,
            order: config.order,
        }
    }

    fn output_color(&self, color: Rgb) -> RGB8 {
        let c = color.scale(self.correction.scale()).dim(self.brightness);
        RGB8::new(c.r, c.g, c.b)
    }
}

impl<'d, P: Instance, const S: usize> LedStrip for Ws2812Strip<'d, P, S> {
    fn fill(&mut self, color: Rgb) -> Result<(), StripError> {
        let out = self.output_color(color);
        self.colors.fill(out);
        Ok(())
    }

    fn set_pixel(&mut self, index: usize, color: Rgb) -> Result<(), StripError> {
        if index >= LED_COUNT {
            return Err(StripError::InvalidIndex);
        }
        self.colors[index] = self.output_color(color);
        Ok(())
    }

    fn write_frame(&mut self, frame: &FrameBuffer) -> Result<(), StripError> {
        let order = self.order;
        let correction = self.correction.scale();
        let brightness = self.brightness;
        for (slot, raw) in self.colors.iter_mut().zip(frame.pixels()) {
            let c = order.decode(raw).scale(correction).dim(brightness);
            *slot = RGB8::new(c.r, c.g, c.b);
        }
        Ok(())
    }

    fn refresh(&mut self) -> Result<(), StripError> {
        // The DMA transfer takes ~27ms for 900 pixels; the receive loop
        // expects refresh to complete before the next poll, so block here.
        block_on(self.driver.write(&self.colors));
        Ok(())
    }

    fn set_brightness(&mut self, level: u8) {
        self.brightness = level;
    }

    fn set_correction(&mut self, profile: CorrectionProfile) {
        self.correction = profile;
    }
}
