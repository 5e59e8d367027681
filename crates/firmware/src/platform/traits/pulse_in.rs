//! Pulse capture interface trait
//!
//! Measures the width of one high pulse on an RC receiver channel.

use crate::platform::Result;

/// Pulse capture interface trait
///
/// # Safety Invariants
///
/// - Pin must be configured as an input before use
/// - Measurement blocks the caller for at most `timeout_us` plus one pulse
pub trait PulseInInterface {
    /// Measure the next complete high pulse
    ///
    /// Waits for a rising edge, then the falling edge, giving up once
    /// `timeout_us` has passed since the call.
    ///
    /// # Returns
    ///
    /// `Ok(Some(width_us))` for a complete pulse, `Ok(None)` on timeout.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::PulseIn` if the pin cannot be sampled.
    fn measure_high(&mut self, timeout_us: u32) -> Result<Option<u32>>;
}
