//! Serial Receive Task
//!
//! Reads UART0 one byte at a time and queues it for the control loop. When
//! the queue is full (host sending while the vehicle is in manual mode and
//! nobody drains it fast enough) the byte is dropped.

use crate::platform::rp2350::UART_RX_QUEUE;
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{Async, UartRx};

/// Serial receive task
#[embassy_executor::task]
pub async fn uart_rx_task(mut rx: UartRx<'static, UART0, Async>) {
    crate::log_info!("Serial receive task started");

    let mut byte = [0u8; 1];
    let mut dropped: u32 = 0;
    loop {
        match rx.read(&mut byte).await {
            Ok(()) => {
                if UART_RX_QUEUE.try_send(byte[0]).is_err() {
                    dropped = dropped.wrapping_add(1);
                    if dropped % 64 == 1 {
                        crate::log_warn!("Serial receive queue full, {} bytes dropped", dropped);
                    }
                }
            }
            Err(e) => {
                crate::log_debug!("UART receive error: {}", e);
            }
        }
    }
}
