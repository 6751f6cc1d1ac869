//! Strandlink - Serial-to-LED bridge firmware
//!
//! Receives per-pixel color frames over UART and drives a WS2811/WS2812
//! strand on RP2040-based boards. The heavy lifting lives in
//! `strandlink-core`; this binary wires the receive loop to a buffered
//! UART and the PIO WS2812 driver.
//!
//! Pin assignments (board-specific):
//! - GPIO1: UART0 RX from the host frame producer
//! - GPIO4: WS2812 data out

#![no_std]
#![no_main]

mod source;
mod strip;

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::peripherals::{PIO0, UART0};
use embassy_rp::pio::{InterruptHandler as PioInterruptHandler, Pio};
use embassy_rp::pio_programs::ws2812::{PioWs2812, PioWs2812Program};
use embassy_rp::uart::{BufferedInterruptHandler, BufferedUartRx, Config as UartConfig, Uart};
use embassy_time::{Delay, Duration, Instant, Timer};
use embedded_io_async::Read;
use heapless::spsc::{Producer, Queue};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use strandlink_core::config::BridgeConfig;
use strandlink_core::receiver::{run_ready_sequence, PollStatus, Receiver};

use crate::source::{UartByteSource, RX_QUEUE_LEN};
use crate::strip::Ws2812Strip;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
    PIO0_IRQ_0 => PioInterruptHandler<PIO0>;
});

// Static cells for UART ring buffers (must live forever)
static TX_BUF: StaticCell<[u8; 32]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 1024]> = StaticCell::new();

// Queue between the UART RX task and the receive loop
static RX_QUEUE: StaticCell<Queue<u8, RX_QUEUE_LEN>> = StaticCell::new();

/// Chunk size for draining the UART into the queue
const RX_CHUNK: usize = 64;

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Strandlink firmware starting...");

    let p = embassy_rp::init(Default::default());
    let config = BridgeConfig::default();

    // UART from the host frame producer. TX is unused but the buffered
    // driver wants both halves; keep its buffer tiny.
    let uart_config = {
        let mut cfg = UartConfig::default();
        cfg.baudrate = config.baudrate;
        cfg
    };
    let tx_buf = TX_BUF.init([0u8; 32]);
    let rx_buf = RX_BUF.init([0u8; 1024]);
    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (_tx, rx) = uart.split();
    info!("UART initialized at {} baud", config.baudrate);

    // WS2812 output via PIO0
    let Pio {
        mut common, sm0, ..
    } = Pio::new(p.PIO0, Irqs);
    let program = PioWs2812Program::new(&mut common);
    let ws2812 = PioWs2812::new(&mut common, sm0, p.DMA_CH0, p.PIN_4, &program);
    let mut strip = Ws2812Strip::new(ws2812, &config);
    info!("PIO WS2812 initialized");

    let queue = RX_QUEUE.init(Queue::new());
    let (producer, consumer) = queue.split();
    let mut byte_source = UartByteSource::new(consumer);

    spawner.spawn(uart_rx_task(rx, producer)).unwrap();

    // Visual handshake: black, ready color, black. No input required.
    if let Err(e) = run_ready_sequence(&mut strip, &mut Delay, &config) {
        error!("Ready sequence failed: {:?}", e);
    }
    info!("Ready sequence complete, entering receive loop");

    let mut receiver = Receiver::new(&config);
    let mut last = Instant::now();

    loop {
        // Whole-millisecond elapsed time for the stall timeout; the
        // sub-millisecond remainder carries over to the next cycle.
        let elapsed_ms = last.elapsed().as_millis() as u32;
        if elapsed_ms > 0 {
            last += Duration::from_millis(elapsed_ms as u64);
        }

        match receiver.poll(&mut byte_source, &mut strip, elapsed_ms) {
            Ok(PollStatus::Idle) => {
                // Unsynchronized and quiet is healthy; just wait for bytes
                Timer::after_millis(1).await;
            }
            Ok(PollStatus::Searching) => {
                // One byte consumed; let the RX task keep the queue fed
                embassy_futures::yield_now().await;
            }
            Ok(PollStatus::Synced) => {
                // Payload still accumulating (~92 bytes/ms at 921600 baud)
                Timer::after_micros(500).await;
            }
            Ok(PollStatus::FrameShown) => {
                trace!("frame displayed");
            }
            Ok(PollStatus::Aborted) => {
                warn!("payload stalled, resynchronizing");
            }
            Err(e) => {
                warn!("strip error: {:?}", e);
                Timer::after_millis(1).await;
            }
        }
    }
}

/// UART receive task - drains the UART into the byte queue
#[embassy_executor::task]
async fn uart_rx_task(mut rx: BufferedUartRx, mut producer: Producer<'static, u8, RX_QUEUE_LEN>) {
    info!("UART RX task started");

    let mut chunk = [0u8; RX_CHUNK];
    let mut dropped: u32 = 0;

    loop {
        match rx.read(&mut chunk).await {
            Ok(0) => {}
            Ok(n) => {
                for &byte in &chunk[..n] {
                    if producer.enqueue(byte).is_err() {
                        // Overflow surfaces as a framing desync downstream;
                        // the marker scan recovers on the next frame.
                        dropped = dropped.wrapping_add(1);
                        if dropped % 1024 == 0 {
                            warn!("RX queue overflow, {} bytes dropped", dropped);
                        }
                    }
                }
            }
            Err(e) => {
                warn!("UART read error: {:?}", e);
                Timer::after_millis(10).await;
            }
        }
    }
}
