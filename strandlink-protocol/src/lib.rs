//! Strandlink wire protocol
//!
//! This crate defines the UART-based protocol between the host-side frame
//! producer and the LED bridge. The protocol is designed for minimum
//! overhead at high frame rates over a short wired link.
//!
//! # Protocol Overview
//!
//! Every frame uses the same fixed-size binary layout:
//! ```text
//! ┌──────┬──────┬──────────────────────────────┐
//! │ 0xAA │ 0x55 │ PAYLOAD (LED_COUNT × 3 bytes)│
//! └──────┴──────┴──────────────────────────────┘
//! ```
//!
//! There is no length field, checksum, or terminator — the frame size is a
//! build-time constant shared by both ends, and any byte that breaks the
//! marker sequence is treated as noise. The bridge recovers frame alignment
//! purely by scanning for the two-byte marker.

#![no_std]
#![deny(unsafe_code)]

pub mod sync;
pub mod wire;

pub use sync::{FeedOutcome, FrameSync, SyncPhase};
pub use wire::{encode_frame, WireError, FRAME_LEN, LED_COUNT, MARKER_1, MARKER_2, PAYLOAD_LEN};
