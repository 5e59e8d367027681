//! RP2350 UART implementation
//!
//! Transmit is blocking on the UART FIFO. Receive runs in
//! `tasks::serial::uart_rx_task`, which feeds [`UART_RX_QUEUE`]; `read` only
//! drains what has already arrived, so the control loop never waits on the
//! host.

use crate::platform::{
    error::{PlatformError, UartError},
    traits::UartInterface,
    Result,
};
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{Async, UartTx};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

/// Receive queue depth (bytes)
pub const RX_QUEUE_DEPTH: usize = 128;

/// Bytes received on UART0 and not yet consumed
pub type RxQueue = Channel<CriticalSectionRawMutex, u8, RX_QUEUE_DEPTH>;

/// Receive queue shared between the RX task and the control loop
pub static UART_RX_QUEUE: RxQueue = Channel::new();

/// RP2350 UART0 wrapper
pub struct Rp2350Uart<'d> {
    tx: UartTx<'d, UART0, Async>,
    rx: &'static RxQueue,
}

impl<'d> Rp2350Uart<'d> {
    /// Pair the transmit half with the shared receive queue
    pub fn new(tx: UartTx<'d, UART0, Async>, rx: &'static RxQueue) -> Self {
        Self { tx, rx }
    }
}

impl UartInterface for Rp2350Uart<'_> {
    fn write(&mut self, data: &[u8]) -> Result<usize> {
        self.tx
            .blocking_write(data)
            .map(|()| data.len())
            .map_err(|_| PlatformError::Uart(UartError::WriteFailed))
    }

    fn read(&mut self, buffer: &mut [u8]) -> Result<usize> {
        let mut count = 0;
        for slot in buffer.iter_mut() {
            match self.rx.try_receive() {
                Ok(byte) => {
                    *slot = byte;
                    count += 1;
                }
                Err(_) => break,
            }
        }
        Ok(count)
    }

    fn available(&self) -> bool {
        !self.rx.is_empty()
    }

    fn flush(&mut self) -> Result<()> {
        self.tx
            .blocking_flush()
            .map_err(|_| PlatformError::Uart(UartError::WriteFailed))
    }
}
