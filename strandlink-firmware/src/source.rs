//! UART-backed byte source.
//!
//! The UART RX task pushes bytes into a static SPSC queue; the receive loop
//! consumes them through [`UartByteSource`]. The queue is sized for one
//! full frame plus headroom so a frame boundary can sit fully buffered
//! while the previous frame is pushed to the strand.

use heapless::spsc::Consumer;
use strandlink_core::traits::ByteSource;

/// Byte queue capacity; must exceed one full frame (2702 bytes)
pub const RX_QUEUE_LEN: usize = 4096;

/// Consumer half of the UART byte queue
pub struct UartByteSource {
    consumer: Consumer<'static, u8, RX_QUEUE_LEN>,
}

impl UartByteSource {
    pub fn new(consumer: Consumer<'static, u8, RX_QUEUE_LEN>) -> Self {
        Self { consumer }
    }
}

impl ByteSource for UartByteSource {
    fn available(&self) -> usize {
        self.consumer.len()
    }

    fn try_read_byte(&mut self) -> Option<u8> {
        self.consumer.dequeue()
    }

    fn try_read_bytes(&mut self, buf: &mut [u8]) -> usize {
        let mut n = 0;
        while n < buf.len() {
            match self.consumer.dequeue() {
                Some(byte) => {
                    buf[n] = byte;
                    n += 1;
                }
                None => break,
            }
        }
        n
    }
}
