//! Mock platform implementation for testing
//!
//! This module provides mock implementations of platform traits that can be used
//! for unit testing without requiring actual hardware.
//!
//! # Feature Gate
//!
//! This module is available in two contexts:
//! - During test builds (`#[cfg(test)]`)
//! - When the `mock` feature is enabled
//!
//! # Example
//!
//! ```ignore
//! use rc_mixer_firmware::platform::mock::MockUart;
//! use rc_mixer_firmware::platform::traits::UartInterface;
//!
//! let mut uart = MockUart::new(Default::default());
//! uart.write(b"test").unwrap();
//! assert_eq!(uart.tx_buffer(), b"test");
//! ```

#![cfg(any(test, feature = "mock"))]

mod gpio;
mod pulse_in;
mod pwm;
mod uart;

pub use gpio::MockGpio;
pub use pulse_in::MockPulseIn;
pub use pwm::MockPwm;
pub use uart::MockUart;
