//! Board-agnostic core logic for the Strandlink LED bridge
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Capability traits (non-blocking byte source, LED strip output)
//! - Pixel and frame buffer types
//! - The receive loop that synchronizes on frame boundaries and publishes
//!   complete frames to the strip
//! - Configuration type definitions
//!
//! Everything here runs unmodified on the host for testing; the firmware
//! crate supplies the UART-backed byte source and the PIO-backed strip.

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod frame;
pub mod receiver;
pub mod traits;
