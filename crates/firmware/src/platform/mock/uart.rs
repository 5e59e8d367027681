//! Mock UART implementation for testing

use crate::platform::{
    Result,
    error::{PlatformError, UartError},
    traits::{UartConfig, UartInterface},
};
use heapless::Vec;

/// Capacity of each mock buffer (bytes)
pub const MOCK_UART_CAPACITY: usize = 1024;

/// Mock UART implementation
///
/// Provides in-memory buffers for transmit and receive data,
/// allowing unit tests to verify UART operations without hardware.
///
/// # Example
///
/// ```ignore
/// use rc_mixer_firmware::platform::mock::MockUart;
/// use rc_mixer_firmware::platform::traits::UartInterface;
///
/// let mut uart = MockUart::new(Default::default());
///
/// // Write data
/// uart.write(b"Hello").unwrap();
///
/// // Verify transmitted data
/// assert_eq!(uart.tx_buffer(), b"Hello");
///
/// // Inject received data for testing
/// uart.inject_rx_data(b"World");
/// let mut buf = [0u8; 5];
/// uart.read(&mut buf).unwrap();
/// assert_eq!(&buf, b"World");
/// ```
#[derive(Debug)]
pub struct MockUart {
    config: UartConfig,
    tx_buffer: Vec<u8, MOCK_UART_CAPACITY>,
    rx_buffer: Vec<u8, MOCK_UART_CAPACITY>,
    fail_writes: bool,
}

impl MockUart {
    /// Create a new mock UART
    pub fn new(config: UartConfig) -> Self {
        Self {
            config,
            tx_buffer: Vec::new(),
            rx_buffer: Vec::new(),
            fail_writes: false,
        }
    }

    /// Get transmitted data (for test verification)
    pub fn tx_buffer(&self) -> &[u8] {
        &self.tx_buffer
    }

    /// Clear transmit buffer
    pub fn clear_tx_buffer(&mut self) {
        self.tx_buffer.clear();
    }

    /// Inject receive data (for test setup)
    ///
    /// Bytes beyond the buffer capacity are dropped.
    pub fn inject_rx_data(&mut self, data: &[u8]) {
        for &byte in data {
            if self.rx_buffer.push(byte).is_err() {
                break;
            }
        }
    }

    /// Bytes received but not yet read
    pub fn rx_pending(&self) -> usize {
        self.rx_buffer.len()
    }

    /// Make writes fail
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Get current baud rate
    pub fn baud_rate(&self) -> u32 {
        self.config.baud_rate
    }
}

impl UartInterface for MockUart {
    fn write(&mut self, data: &[u8]) -> Result<usize> {
        if self.fail_writes {
            return Err(PlatformError::Uart(UartError::WriteFailed));
        }
        let room = MOCK_UART_CAPACITY - self.tx_buffer.len();
        let count = data.len().min(room);
        // Cannot fail: count is bounded by the remaining capacity
        let _ = self.tx_buffer.extend_from_slice(&data[..count]);
        Ok(count)
    }

    fn read(&mut self, buffer: &mut [u8]) -> Result<usize> {
        let count = buffer.len().min(self.rx_buffer.len());
        buffer[..count].copy_from_slice(&self.rx_buffer[..count]);
        let remaining = self.rx_buffer.len() - count;
        self.rx_buffer.rotate_left(count);
        self.rx_buffer.truncate(remaining);
        Ok(count)
    }

    fn available(&self) -> bool {
        !self.rx_buffer.is_empty()
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}
