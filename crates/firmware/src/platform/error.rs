//! Platform error types
//!
//! This module defines error types for platform operations.

use core::fmt;

/// Result type for platform operations
pub type Result<T> = core::result::Result<T, PlatformError>;

/// Platform-level errors
///
/// All platform implementations map their HAL-specific errors to these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformError {
    /// UART operation failed
    Uart(UartError),
    /// PWM operation failed
    Pwm(PwmError),
    /// GPIO operation failed
    Gpio(GpioError),
    /// Pulse capture failed
    PulseIn(PulseInError),
    /// Platform initialization failed
    InitializationFailed,
    /// Invalid configuration provided
    InvalidConfig,
}

/// UART-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UartError {
    /// Write operation failed
    WriteFailed,
    /// Read operation failed
    ReadFailed,
    /// Invalid baud rate
    InvalidBaudRate,
    /// Receive overrun, bytes were lost
    Overrun,
}

/// PWM-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PwmError {
    /// Invalid duty cycle value
    InvalidDutyCycle,
    /// Invalid frequency
    InvalidFrequency,
}

/// GPIO-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpioError {
    /// Invalid mode for operation
    InvalidMode,
    /// Pin driver reported a failure
    HardwareError,
}

/// Pulse capture errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PulseInError {
    /// Pin is not configured as an input
    InvalidMode,
}

impl PlatformError {
    /// Short static description, for `&'static str` error paths
    pub const fn as_str(&self) -> &'static str {
        match self {
            PlatformError::Uart(_) => "UART error",
            PlatformError::Pwm(_) => "PWM error",
            PlatformError::Gpio(_) => "GPIO error",
            PlatformError::PulseIn(_) => "pulse capture error",
            PlatformError::InitializationFailed => "platform initialization failed",
            PlatformError::InvalidConfig => "invalid configuration",
        }
    }
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::Uart(e) => write!(f, "UART error: {:?}", e),
            PlatformError::Pwm(e) => write!(f, "PWM error: {:?}", e),
            PlatformError::Gpio(e) => write!(f, "GPIO error: {:?}", e),
            PlatformError::PulseIn(e) => write!(f, "Pulse capture error: {:?}", e),
            PlatformError::InitializationFailed => write!(f, "Platform initialization failed"),
            PlatformError::InvalidConfig => write!(f, "Invalid configuration"),
        }
    }
}
