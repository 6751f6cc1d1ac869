//! Capability traits
//!
//! These traits define the seams between the receive loop and the
//! hardware-specific implementations, and let the whole loop run against
//! in-memory fakes on the host.

pub mod source;
pub mod strip;

pub use source::ByteSource;
pub use strip::{LedStrip, StripError};
