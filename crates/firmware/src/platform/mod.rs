//! Platform abstraction layer
//!
//! This module provides hardware abstraction for the microcontroller.
//! All platform-specific code is isolated here; everything above it talks to
//! the traits in [`traits`].

pub mod error;
pub mod traits;

#[cfg(feature = "pico2_w")]
pub mod time;

// Platform implementations (feature-gated)
#[cfg(feature = "pico2_w")]
pub mod rp2350;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use error::{PlatformError, Result};
#[cfg(feature = "pico2_w")]
pub use time::EmbassyTime;
pub use traits::{GpioInterface, PulseInInterface, PwmInterface, UartInterface};
