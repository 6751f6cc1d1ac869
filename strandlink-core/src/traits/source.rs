//! Non-blocking byte source capability.

/// A non-blocking, front-only view of an incoming byte stream.
///
/// The receive loop polls this cooperatively: every call returns
/// immediately, and a call that finds no data is a no-op. Bytes once
/// consumed are never re-examined.
///
/// Implementations: a UART-fed SPSC queue in the firmware, an in-memory
/// feeder in tests.
pub trait ByteSource {
    /// Number of bytes currently readable without blocking
    fn available(&self) -> usize;

    /// Consume one byte if any is available
    fn try_read_byte(&mut self) -> Option<u8>;

    /// Bulk-consume up to `buf.len()` bytes, returning how many were read.
    ///
    /// The receive loop only calls this after [`available`](Self::available)
    /// has confirmed the full count, so a short read indicates a source
    /// contract violation.
    fn try_read_bytes(&mut self, buf: &mut [u8]) -> usize;
}
