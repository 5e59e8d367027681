//! Embassy-based time source implementation.
//!
//! Backs the control loop's `TimeSource` with Embassy's time driver.

use rc_mixer_core::traits::TimeSource;

/// Embassy-based time source using the Embassy time driver.
///
/// # Example
///
/// ```ignore
/// use rc_mixer_firmware::platform::EmbassyTime;
/// use rc_mixer_core::traits::TimeSource;
///
/// let time = EmbassyTime;
/// let now = time.now_ms();
/// ```
#[derive(Clone, Copy, Default)]
pub struct EmbassyTime;

impl TimeSource for EmbassyTime {
    fn now_ms(&self) -> u64 {
        embassy_time::Instant::now().as_millis()
    }

    fn now_us(&self) -> u64 {
        embassy_time::Instant::now().as_micros()
    }
}
