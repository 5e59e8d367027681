//! UART interface trait
//!
//! This module defines the UART communication interface that platform implementations must provide.

use crate::platform::Result;

/// UART configuration
#[derive(Debug, Clone, Copy)]
pub struct UartConfig {
    /// Baud rate in bits per second
    pub baud_rate: u32,
    /// Data bits (typically 8)
    pub data_bits: u8,
    /// Parity mode
    pub parity: UartParity,
    /// Stop bits
    pub stop_bits: UartStopBits,
}

impl Default for UartConfig {
    fn default() -> Self {
        Self {
            baud_rate: 115200,
            data_bits: 8,
            parity: UartParity::None,
            stop_bits: UartStopBits::One,
        }
    }
}

/// UART parity modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UartParity {
    /// No parity
    None,
    /// Even parity
    Even,
    /// Odd parity
    Odd,
}

/// UART stop bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UartStopBits {
    /// One stop bit
    One,
    /// Two stop bits
    Two,
}

/// UART interface trait
///
/// # Safety Invariants
///
/// - UART peripheral must be initialized before use
/// - Only one owner per UART peripheral instance
pub trait UartInterface {
    /// Write data to UART
    ///
    /// Returns the number of bytes written.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Uart` if the write operation fails.
    fn write(&mut self, data: &[u8]) -> Result<usize>;

    /// Read already-received data from UART without blocking
    ///
    /// Reads up to `buffer.len()` bytes into the provided buffer and returns
    /// the number of bytes actually read (0 when nothing is pending).
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Uart` if the read operation fails.
    fn read(&mut self, buffer: &mut [u8]) -> Result<usize>;

    /// Check if data is available to read
    ///
    /// Returns `true` if at least one byte can be read without blocking.
    fn available(&self) -> bool;

    /// Flush transmit buffer
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Uart` if the flush operation fails.
    fn flush(&mut self) -> Result<()>;
}
