//! Speed limiting and pulse remapping
//!
//! Autonomous commands arrive as signed percentages. Steering is clamped to
//! ±100 %, throttle to the asymmetric `[-reverse_limit, forward_limit]`
//! window (forward is capped harder than reverse), and both are then mapped
//! linearly onto actuator pulse widths.
//!
//! The ESC ignores forward pulses just above neutral, so autonomous throttle
//! pulses that land in `(neutral, dead_band_exit)` are raised to
//! `dead_band_exit`.
//!
//! Manual throttle uses a separate policy: the raw receiver offset from
//! 1500 µs is clamped with the same percent limits (read as microseconds)
//! and re-centered on `manual_throttle_center_us`. The two policies act on
//! different input domains and are not interchangeable.

use crate::config::{MixerConfig, NEUTRAL_PULSE_US};

/// Integer linear map with truncation toward zero
///
/// `(x - in_min) * (out_max - out_min) / (in_max - in_min) + out_min`
///
/// Returns `out_min` for a degenerate input range.
pub fn map_range(x: i32, in_min: i32, in_max: i32, out_min: i32, out_max: i32) -> i32 {
    let span = in_max - in_min;
    if span == 0 {
        return out_min;
    }
    (x - in_min) * (out_max - out_min) / span + out_min
}

/// Clamp and remap steering/throttle commands
#[derive(Debug, Clone, Copy)]
pub struct SpeedLimiter {
    config: MixerConfig,
}

impl SpeedLimiter {
    /// Create a limiter from the mixer configuration
    pub const fn new(config: MixerConfig) -> Self {
        Self { config }
    }

    /// Clamp a steering command to [-100, 100] percent
    pub fn limit_steering(&self, cmd: i32) -> i32 {
        cmd.clamp(-100, 100)
    }

    /// Clamp a throttle command to the asymmetric limits
    ///
    /// Positive commands are capped at `forward_limit`; zero and negative
    /// commands are floored at `-reverse_limit`. Zero takes the forward
    /// branch and stays zero.
    pub fn limit_throttle(&self, cmd: i32) -> i32 {
        if cmd > 0 {
            cmd.clamp(0, self.config.forward_limit)
        } else {
            cmd.clamp(-self.config.reverse_limit, 0)
        }
    }

    /// Map a limited steering command onto the steering servo range
    pub fn steering_to_pulse(&self, cmd: i32) -> u16 {
        let min = i32::from(self.config.steering_min_us);
        let max = i32::from(self.config.steering_max_us);
        let pulse = map_range(cmd, -100, 100, min, max);
        clamp_pulse(pulse, min, max)
    }

    /// Linear throttle map without the dead-band skip
    ///
    /// `0..=forward_limit` maps onto the forward band, negative commands onto
    /// the reverse band. A zero command maps to `forward_min_us`.
    pub fn scale_throttle(&self, cmd: i32) -> u16 {
        let (min, max) = self.throttle_bounds();
        let pulse = if cmd >= 0 {
            map_range(
                cmd,
                0,
                self.config.forward_limit,
                i32::from(self.config.forward_min_us),
                i32::from(self.config.forward_max_us),
            )
        } else {
            map_range(
                cmd,
                -self.config.reverse_limit,
                0,
                i32::from(self.config.reverse_min_us),
                i32::from(self.config.reverse_max_us),
            )
        };
        clamp_pulse(pulse, i32::from(min), i32::from(max))
    }

    /// Map a limited throttle command onto the ESC range, skipping the dead band
    pub fn throttle_to_pulse(&self, cmd: i32) -> u16 {
        self.skip_dead_band(self.scale_throttle(cmd))
    }

    /// Raise pulses strictly inside `(neutral, dead_band_exit)` to `dead_band_exit`
    pub fn skip_dead_band(&self, pulse_us: u16) -> u16 {
        if pulse_us > NEUTRAL_PULSE_US && pulse_us < self.config.dead_band_exit_us {
            self.config.dead_band_exit_us
        } else {
            pulse_us
        }
    }

    /// Manual-mode throttle passthrough
    ///
    /// # Arguments
    ///
    /// * `raw_us` - Receiver throttle reading, already checked against the
    ///   valid window
    ///
    /// # Returns
    ///
    /// `manual_throttle_center_us + limit_throttle(raw_us - 1500)`
    pub fn manual_throttle_pulse(&self, raw_us: u16) -> u16 {
        let offset = i32::from(raw_us) - i32::from(NEUTRAL_PULSE_US);
        let pulse = i32::from(self.config.manual_throttle_center_us) + self.limit_throttle(offset);
        let (min, max) = self.throttle_bounds();
        clamp_pulse(pulse, i32::from(min), i32::from(max))
    }

    /// Safe ESC output range `(lowest, highest)` in microseconds
    pub fn throttle_bounds(&self) -> (u16, u16) {
        (self.config.reverse_min_us, self.config.forward_max_us)
    }

    /// Safe steering output range `(lowest, highest)` in microseconds
    pub fn steering_bounds(&self) -> (u16, u16) {
        (self.config.steering_min_us, self.config.steering_max_us)
    }
}

impl Default for SpeedLimiter {
    fn default() -> Self {
        Self::new(MixerConfig::default())
    }
}

fn clamp_pulse(pulse: i32, min: i32, max: i32) -> u16 {
    // Bounds come from u16 config fields, so the clamped value fits
    pulse.clamp(min, max) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_range_truncates_toward_zero() {
        assert_eq!(map_range(50, -100, 100, 1000, 2000), 1750);
        assert_eq!(map_range(-33, -100, 100, 1000, 2000), 1335);
        assert_eq!(map_range(13, 0, 40, 1520, 1620), 1552);
        assert_eq!(map_range(5, 3, 3, 10, 20), 10);
    }

    #[test]
    fn test_limit_steering() {
        let limiter = SpeedLimiter::default();
        assert_eq!(limiter.limit_steering(150), 100);
        assert_eq!(limiter.limit_steering(-150), -100);
        assert_eq!(limiter.limit_steering(42), 42);
    }

    #[test]
    fn test_limit_throttle_asymmetric() {
        let limiter = SpeedLimiter::default();
        assert_eq!(limiter.limit_throttle(100), 40);
        assert_eq!(limiter.limit_throttle(40), 40);
        assert_eq!(limiter.limit_throttle(25), 25);
        assert_eq!(limiter.limit_throttle(0), 0);
        assert_eq!(limiter.limit_throttle(-30), -30);
        assert_eq!(limiter.limit_throttle(-100), -75);
    }

    #[test]
    fn test_steering_to_pulse_endpoints() {
        let limiter = SpeedLimiter::default();
        assert_eq!(limiter.steering_to_pulse(-100), 1000);
        assert_eq!(limiter.steering_to_pulse(0), 1500);
        assert_eq!(limiter.steering_to_pulse(100), 2000);
        assert_eq!(limiter.steering_to_pulse(50), 1750);
    }

    #[test]
    fn test_steering_monotonic_and_bounded() {
        let limiter = SpeedLimiter::default();
        let mut previous = 0;
        for cmd in -100..=100 {
            let pulse = limiter.steering_to_pulse(limiter.limit_steering(cmd));
            assert!((1000..=2000).contains(&pulse));
            assert!(pulse >= previous);
            previous = pulse;
        }
    }

    #[test]
    fn test_scale_throttle_zero_is_forward() {
        let limiter = SpeedLimiter::default();
        assert_eq!(limiter.scale_throttle(0), 1520);
        assert_eq!(limiter.scale_throttle(40), 1620);
        assert_eq!(limiter.scale_throttle(-75), 1100);
        assert_eq!(limiter.scale_throttle(-1), 1474);
    }

    #[test]
    fn test_throttle_to_pulse_skips_dead_band() {
        let limiter = SpeedLimiter::default();
        assert_eq!(limiter.throttle_to_pulse(0), 1553);
        assert_eq!(limiter.throttle_to_pulse(13), 1553);
        assert_eq!(limiter.throttle_to_pulse(14), 1555);
        assert_eq!(limiter.throttle_to_pulse(40), 1620);
        assert_eq!(limiter.throttle_to_pulse(-30), 1328);
    }

    #[test]
    fn test_throttle_ranges_hold_for_all_commands() {
        let limiter = SpeedLimiter::default();
        for cmd in -200..=200 {
            let limited = limiter.limit_throttle(cmd);
            let pulse = limiter.throttle_to_pulse(limited);
            if limited >= 0 {
                assert!((1553..=1620).contains(&pulse), "cmd {cmd} -> {pulse}");
            } else {
                assert!((1100..=1480).contains(&pulse), "cmd {cmd} -> {pulse}");
            }
        }
    }

    #[test]
    fn test_skip_dead_band_edges() {
        let limiter = SpeedLimiter::default();
        assert_eq!(limiter.skip_dead_band(1500), 1500);
        assert_eq!(limiter.skip_dead_band(1501), 1553);
        assert_eq!(limiter.skip_dead_band(1552), 1553);
        assert_eq!(limiter.skip_dead_band(1553), 1553);
        assert_eq!(limiter.skip_dead_band(1480), 1480);
    }

    #[test]
    fn test_manual_throttle_pulse() {
        let limiter = SpeedLimiter::default();
        assert_eq!(limiter.manual_throttle_pulse(1500), 1504);
        assert_eq!(limiter.manual_throttle_pulse(1800), 1544);
        assert_eq!(limiter.manual_throttle_pulse(1300), 1429);
        assert_eq!(limiter.manual_throttle_pulse(1520), 1524);
        assert_eq!(limiter.manual_throttle_pulse(1000), 1429);
        assert_eq!(limiter.manual_throttle_pulse(2000), 1544);
    }
}
