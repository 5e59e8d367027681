//! Platform abstraction traits
//!
//! This module defines the traits that platform implementations must provide.

pub mod gpio;
pub mod pulse_in;
pub mod pwm;
pub mod uart;

// Re-export trait interfaces
pub use gpio::{GpioInterface, GpioMode};
pub use pulse_in::PulseInInterface;
pub use pwm::{PwmConfig, PwmInterface};
pub use uart::{UartConfig, UartInterface, UartParity, UartStopBits};
