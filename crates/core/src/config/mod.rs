//! Mixer configuration
//!
//! All limits are fixed at build time. `MixerConfig::default()` carries the
//! values the vehicle ships with; tests build variants with struct update
//! syntax.

/// Maximum forward throttle command (percent)
pub const FORWARD_LIMIT: i32 = 40;

/// Maximum reverse throttle command (percent)
pub const REVERSE_LIMIT: i32 = 75;

/// Blink half-period for the zone LEDs (milliseconds)
pub const BLINK_INTERVAL_MS: u64 = 300;

/// Pulse measurement timeout (microseconds)
pub const PULSE_TIMEOUT_US: u32 = 25_000;

/// Neutral / center pulse width (microseconds)
pub const NEUTRAL_PULSE_US: u16 = 1500;

/// Serial command line capacity (characters kept per line)
pub const LINE_CAPACITY: usize = 31;

/// Mixer calibration and policy parameters
///
/// Pulse widths are in microseconds, speed limits in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MixerConfig {
    /// Forward throttle cap (percent)
    pub forward_limit: i32,
    /// Reverse throttle cap (percent)
    pub reverse_limit: i32,

    /// Zone LED blink half-period (ms)
    pub blink_interval_ms: u64,
    /// Pulse measurement timeout (µs)
    pub pulse_timeout_us: u32,

    /// Readings strictly above this select autonomous mode
    pub mode_threshold_us: u16,
    /// LED override channel readings strictly above this force both zone LEDs on
    pub override_threshold_us: u16,
    /// Blink trigger readings at or above this blink the high-zone LED
    pub high_zone_us: u16,
    /// Blink trigger readings in (0, low_zone_us] blink the low-zone LED
    pub low_zone_us: u16,

    /// Lowest receiver pulse accepted in manual mode
    pub valid_min_us: u16,
    /// Highest receiver pulse accepted in manual mode
    pub valid_max_us: u16,

    /// Steering servo pulse at -100 %
    pub steering_min_us: u16,
    /// Steering servo pulse at +100 %
    pub steering_max_us: u16,

    /// ESC pulse at full reverse
    pub reverse_min_us: u16,
    /// ESC pulse at the smallest reverse command
    pub reverse_max_us: u16,
    /// ESC pulse at zero forward command
    pub forward_min_us: u16,
    /// ESC pulse at full forward
    pub forward_max_us: u16,
    /// Lowest pulse that produces forward motion; pulses in (neutral, this) are raised to it
    pub dead_band_exit_us: u16,

    /// Center used for manual throttle passthrough
    pub manual_throttle_center_us: u16,
}

impl Default for MixerConfig {
    fn default() -> Self {
        Self {
            forward_limit: FORWARD_LIMIT,
            reverse_limit: REVERSE_LIMIT,
            blink_interval_ms: BLINK_INTERVAL_MS,
            pulse_timeout_us: PULSE_TIMEOUT_US,
            mode_threshold_us: 1500,
            override_threshold_us: 1500,
            high_zone_us: 1900,
            low_zone_us: 1100,
            valid_min_us: 1000,
            valid_max_us: 2000,
            steering_min_us: 1000,
            steering_max_us: 2000,
            reverse_min_us: 1100,
            reverse_max_us: 1480,
            forward_min_us: 1520,
            forward_max_us: 1620,
            dead_band_exit_us: 1553,
            manual_throttle_center_us: 1504,
        }
    }
}

impl MixerConfig {
    /// Check whether a receiver reading is inside the accepted manual window
    #[inline]
    pub fn is_valid_pulse(&self, pulse_us: u16) -> bool {
        (self.valid_min_us..=self.valid_max_us).contains(&pulse_us)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let config = MixerConfig::default();
        assert_eq!(config.forward_limit, 40);
        assert_eq!(config.reverse_limit, 75);
        assert_eq!(config.blink_interval_ms, 300);
        assert_eq!(config.pulse_timeout_us, 25_000);
    }

    #[test]
    fn test_forward_capped_harder_than_reverse() {
        let config = MixerConfig::default();
        assert!(config.forward_limit < config.reverse_limit);
    }

    #[test]
    fn test_is_valid_pulse() {
        let config = MixerConfig::default();
        assert!(config.is_valid_pulse(1000));
        assert!(config.is_valid_pulse(1500));
        assert!(config.is_valid_pulse(2000));
        assert!(!config.is_valid_pulse(0));
        assert!(!config.is_valid_pulse(999));
        assert!(!config.is_valid_pulse(2001));
    }
}
