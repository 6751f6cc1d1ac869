//! Frame boundary synchronization.
//!
//! The byte stream carries no length prefix or terminator, so the receiver
//! recovers frame alignment by scanning for the two-byte marker sequence.
//! [`FrameSync`] is the state machine for that scan: bytes are fed in one at
//! a time and anything that does not advance the marker match is discarded
//! as noise.
//!
//! A mismatched byte in [`SyncPhase::AwaitMarker2`] drops straight back to
//! [`SyncPhase::AwaitMarker1`] without being re-tested as a candidate first
//! marker byte. When 0xAA happens to follow a false 0xAA this loses one
//! frame and resynchronizes on the next marker pair; the simpler scan is
//! kept deliberately.

use crate::wire::{MARKER_1, MARKER_2};

/// Synchronization phase
///
/// Process-lifetime state: initialized to `AwaitMarker1` at startup and
/// mutated only by the receive loop. `AwaitMarker1` is the recovery target
/// from every framing failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SyncPhase {
    /// Scanning for the first marker byte (0xAA)
    #[default]
    AwaitMarker1,
    /// Got 0xAA, expecting the second marker byte (0x55)
    AwaitMarker2,
    /// Marker matched; the next PAYLOAD_LEN bytes are frame data
    AwaitPayload,
}

/// Result of feeding one byte to the synchronizer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FeedOutcome {
    /// Still scanning for the marker sequence
    Searching,
    /// Marker sequence complete; payload follows
    Synced,
}

/// State machine that locates frame boundaries in an unstructured byte
/// stream.
///
/// Consumes exactly one byte per [`feed`](FrameSync::feed) call and never
/// blocks; the caller polls its byte source and feeds bytes as they become
/// available. There is no invalid input — non-marker bytes are noise and are
/// silently discarded.
#[derive(Debug, Clone, Default)]
pub struct FrameSync {
    phase: SyncPhase,
}

impl FrameSync {
    /// Create a new synchronizer in `AwaitMarker1`
    pub const fn new() -> Self {
        Self {
            phase: SyncPhase::AwaitMarker1,
        }
    }

    /// Current synchronization phase
    pub fn phase(&self) -> SyncPhase {
        self.phase
    }

    /// Whether the marker has been matched and payload bytes are expected
    pub fn is_synced(&self) -> bool {
        self.phase == SyncPhase::AwaitPayload
    }

    /// Feed one byte of the stream while scanning for the marker.
    ///
    /// Only meaningful in the two marker phases; in `AwaitPayload` the
    /// caller transfers payload bytes in bulk instead of feeding them here,
    /// and this returns [`FeedOutcome::Synced`] without consuming state.
    pub fn feed(&mut self, byte: u8) -> FeedOutcome {
        match self.phase {
            SyncPhase::AwaitMarker1 => {
                if byte == MARKER_1 {
                    self.phase = SyncPhase::AwaitMarker2;
                }
                FeedOutcome::Searching
            }
            SyncPhase::AwaitMarker2 => {
                if byte == MARKER_2 {
                    self.phase = SyncPhase::AwaitPayload;
                    FeedOutcome::Synced
                } else {
                    // Mismatch: discard the byte and restart the scan.
                    // The byte is not re-tested as a candidate MARKER_1.
                    self.phase = SyncPhase::AwaitMarker1;
                    FeedOutcome::Searching
                }
            }
            SyncPhase::AwaitPayload => {
                debug_assert!(false, "feed() called while synchronized");
                FeedOutcome::Synced
            }
        }
    }

    /// Mark the current frame's payload as consumed, restarting the marker
    /// scan for the next frame.
    pub fn frame_taken(&mut self) {
        self.phase = SyncPhase::AwaitMarker1;
    }

    /// Abandon the current phase and restart the marker scan.
    ///
    /// Used by timeout-driven recovery when payload delivery stalls.
    pub fn resync(&mut self) {
        self.phase = SyncPhase::AwaitMarker1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_marker_sequence_syncs() {
        let mut sync = FrameSync::new();
        assert_eq!(sync.phase(), SyncPhase::AwaitMarker1);

        assert_eq!(sync.feed(MARKER_1), FeedOutcome::Searching);
        assert_eq!(sync.phase(), SyncPhase::AwaitMarker2);

        assert_eq!(sync.feed(MARKER_2), FeedOutcome::Synced);
        assert_eq!(sync.phase(), SyncPhase::AwaitPayload);
        assert!(sync.is_synced());
    }

    #[test]
    fn test_non_marker_bytes_discarded() {
        let mut sync = FrameSync::new();
        for byte in [0x00, 0x55, 0xFF, 0x12] {
            assert_eq!(sync.feed(byte), FeedOutcome::Searching);
            assert_eq!(sync.phase(), SyncPhase::AwaitMarker1);
        }
    }

    #[test]
    fn test_mismatch_after_marker1_restarts_scan() {
        let mut sync = FrameSync::new();
        sync.feed(MARKER_1);
        assert_eq!(sync.feed(0x00), FeedOutcome::Searching);
        assert_eq!(sync.phase(), SyncPhase::AwaitMarker1);
    }

    #[test]
    fn test_false_start_discards_second_marker1() {
        // 0xAA 0xAA: the second 0xAA mismatches MARKER_2 and is discarded,
        // not re-tested. A following 0x55 therefore does NOT sync.
        let mut sync = FrameSync::new();
        sync.feed(MARKER_1);
        sync.feed(MARKER_1);
        assert_eq!(sync.phase(), SyncPhase::AwaitMarker1);

        sync.feed(MARKER_2);
        assert_eq!(sync.phase(), SyncPhase::AwaitMarker1);

        // The next full marker pair does sync.
        sync.feed(MARKER_1);
        assert_eq!(sync.feed(MARKER_2), FeedOutcome::Synced);
    }

    #[test]
    fn test_frame_taken_restarts_scan() {
        let mut sync = FrameSync::new();
        sync.feed(MARKER_1);
        sync.feed(MARKER_2);
        sync.frame_taken();
        assert_eq!(sync.phase(), SyncPhase::AwaitMarker1);
    }

    #[test]
    fn test_resync_from_any_phase() {
        let mut sync = FrameSync::new();
        sync.feed(MARKER_1);
        sync.resync();
        assert_eq!(sync.phase(), SyncPhase::AwaitMarker1);

        sync.feed(MARKER_1);
        sync.feed(MARKER_2);
        sync.resync();
        assert_eq!(sync.phase(), SyncPhase::AwaitMarker1);
    }

    proptest! {
        /// A stream with no 0xAA bytes never leaves AwaitMarker1.
        #[test]
        fn prop_noise_without_marker1_never_syncs(
            noise in proptest::collection::vec(any::<u8>().prop_filter("not MARKER_1", |b| *b != MARKER_1), 0..512)
        ) {
            let mut sync = FrameSync::new();
            for byte in noise {
                sync.feed(byte);
                prop_assert_eq!(sync.phase(), SyncPhase::AwaitMarker1);
            }
        }

        /// After arbitrary noise free of 0xAA, a marker pair always syncs.
        #[test]
        fn prop_marker_pair_syncs_after_noise(
            noise in proptest::collection::vec(any::<u8>().prop_filter("not MARKER_1", |b| *b != MARKER_1), 0..512)
        ) {
            let mut sync = FrameSync::new();
            for byte in noise {
                sync.feed(byte);
            }
            sync.feed(MARKER_1);
            prop_assert_eq!(sync.feed(MARKER_2), FeedOutcome::Synced);
        }
    }
}
