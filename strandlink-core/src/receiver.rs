//! The receive loop: frame synchronization, payload loading, and display.
//!
//! [`Receiver`] is the single piece of process-lifetime state. Each
//! [`poll`](Receiver::poll) performs one state evaluation: in the marker
//! phases it consumes at most one byte; once synchronized it waits for the
//! full payload and then performs one bulk transfer into the frame buffer,
//! refreshes the strip, and restarts the marker scan. No call ever blocks.
//!
//! Timing is fed by the caller as elapsed milliseconds, so the core stays
//! clock-free and host-testable. The only timeout is the payload stall
//! abort; a channel that never sends a marker leaves the receiver idle
//! indefinitely, which is healthy, not an error.

use embedded_hal::delay::DelayNs;
use strandlink_protocol::{FeedOutcome, FrameSync, SyncPhase, PAYLOAD_LEN};

use crate::config::BridgeConfig;
use crate::frame::{FrameBuffer, Rgb};
use crate::traits::{ByteSource, LedStrip, StripError};

/// Outcome of one poll cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PollStatus {
    /// No byte available; nothing changed
    Idle,
    /// Consumed one byte while scanning for the marker
    Searching,
    /// Synchronized; payload not yet complete
    Synced,
    /// A complete frame was transferred and refreshed onto the strip
    FrameShown,
    /// Payload delivery stalled past the timeout; marker scan restarted
    Aborted,
}

/// Frame receiver: synchronizer plus loader/sink.
///
/// Owns the one frame buffer for the process lifetime. The buffer is only
/// ever overwritten by a complete payload, so the previously displayed
/// frame survives any amount of noise, desynchronization, or stalling.
pub struct Receiver {
    sync: FrameSync,
    frame: FrameBuffer,
    stall_timeout_ms: Option<u32>,
    stall_elapsed_ms: u32,
    last_available: usize,
}

impl Receiver {
    pub fn new(config: &BridgeConfig) -> Self {
        Self {
            sync: FrameSync::new(),
            frame: FrameBuffer::new(),
            stall_timeout_ms: config.stall_timeout_ms,
            stall_elapsed_ms: 0,
            last_available: 0,
        }
    }

    /// Current synchronization phase
    pub fn phase(&self) -> SyncPhase {
        self.sync.phase()
    }

    /// The currently displayed frame's payload
    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    /// Run one state evaluation.
    ///
    /// `elapsed_ms` is the time since the previous poll; it only feeds the
    /// payload stall timeout and may be 0.
    pub fn poll<S: ByteSource, L: LedStrip>(
        &mut self,
        source: &mut S,
        strip: &mut L,
        elapsed_ms: u32,
    ) -> Result<PollStatus, StripError> {
        match self.sync.phase() {
            SyncPhase::AwaitMarker1 | SyncPhase::AwaitMarker2 => {
                let Some(byte) = source.try_read_byte() else {
                    return Ok(PollStatus::Idle);
                };
                match self.sync.feed(byte) {
                    FeedOutcome::Searching => Ok(PollStatus::Searching),
                    FeedOutcome::Synced => {
                        self.stall_elapsed_ms = 0;
                        self.last_available = source.available();
                        Ok(PollStatus::Synced)
                    }
                }
            }
            SyncPhase::AwaitPayload => self.poll_payload(source, strip, elapsed_ms),
        }
    }

    fn poll_payload<S: ByteSource, L: LedStrip>(
        &mut self,
        source: &mut S,
        strip: &mut L,
        elapsed_ms: u32,
    ) -> Result<PollStatus, StripError> {
        let available = source.available();

        if available >= PAYLOAD_LEN {
            let n = source.try_read_bytes(self.frame.as_bytes_mut());
            debug_assert_eq!(n, PAYLOAD_LEN);
            strip.write_frame(&self.frame)?;
            strip.refresh()?;
            self.sync.frame_taken();
            return Ok(PollStatus::FrameShown);
        }

        if let Some(timeout) = self.stall_timeout_ms {
            if available > self.last_available {
                self.last_available = available;
                self.stall_elapsed_ms = 0;
            } else {
                self.stall_elapsed_ms = self.stall_elapsed_ms.saturating_add(elapsed_ms);
                if self.stall_elapsed_ms >= timeout {
                    // Abandon the frame; the stalled bytes stay queued and
                    // the marker scan consumes them as noise.
                    self.sync.resync();
                    self.stall_elapsed_ms = 0;
                    self.last_available = 0;
                    return Ok(PollStatus::Aborted);
                }
            }
        }

        Ok(PollStatus::Synced)
    }
}

/// One-time startup indication: black, ready color, black.
///
/// A fixed visual handshake with no acknowledgment from the sender; runs
/// before the first poll, needs no input.
pub fn run_ready_sequence<L: LedStrip, D: DelayNs>(
    strip: &mut L,
    delay: &mut D,
    config: &BridgeConfig,
) -> Result<(), StripError> {
    strip.fill(Rgb::BLACK)?;
    strip.refresh()?;
    delay.delay_ms(config.ready_blank_ms);

    strip.fill(config.ready_color)?;
    strip.refresh()?;
    delay.delay_ms(config.ready_hold_ms);

    strip.fill(Rgb::BLACK)?;
    strip.refresh()?;
    Ok(())
}
