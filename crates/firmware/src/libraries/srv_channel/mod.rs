//! Steering servo and throttle ESC outputs
//!
//! Pulses arrive already limited by the mixer; this layer only converts
//! them to 50 Hz PWM duty cycles.

use crate::platform::traits::PwmInterface;
use rc_mixer_core::config::NEUTRAL_PULSE_US;

// Re-export core servo types
pub use rc_mixer_core::servo::{OutputChannel, PulseOutput};

/// PWM-backed actuator outputs
pub struct ServoOutputs<S: PwmInterface, T: PwmInterface> {
    steering: S,
    throttle: T,
}

impl<S: PwmInterface, T: PwmInterface> ServoOutputs<S, T> {
    /// Take ownership of both PWM channels and start them at neutral
    ///
    /// # Errors
    ///
    /// Returns the platform error if a channel rejects the neutral pulse.
    pub fn new(mut steering: S, mut throttle: T) -> crate::platform::Result<Self> {
        steering.set_pulse_us(NEUTRAL_PULSE_US)?;
        throttle.set_pulse_us(NEUTRAL_PULSE_US)?;
        steering.enable();
        throttle.enable();
        Ok(Self { steering, throttle })
    }

    /// Steering PWM channel
    pub fn steering(&self) -> &S {
        &self.steering
    }

    /// Throttle PWM channel
    pub fn throttle(&self) -> &T {
        &self.throttle
    }
}

impl<S: PwmInterface, T: PwmInterface> PulseOutput for ServoOutputs<S, T> {
    fn write_pulse(&mut self, channel: OutputChannel, pulse_us: u16) -> Result<(), &'static str> {
        let result = match channel {
            OutputChannel::Steering => self.steering.set_pulse_us(pulse_us),
            OutputChannel::Throttle => self.throttle.set_pulse_us(pulse_us),
        };
        result.map_err(|e| e.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::MockPwm;
    use crate::platform::traits::PwmConfig;
    use rc_mixer_core::servo::duty_cycle_to_pulse;

    fn outputs() -> ServoOutputs<MockPwm, MockPwm> {
        ServoOutputs::new(
            MockPwm::new(PwmConfig::default()),
            MockPwm::new(PwmConfig::default()),
        )
        .unwrap()
    }

    #[test]
    fn test_starts_enabled_at_neutral() {
        let out = outputs();
        assert!(out.steering().is_enabled());
        assert!(out.throttle().is_enabled());
        assert_eq!(duty_cycle_to_pulse(out.steering().duty_cycle()), 1500);
        assert_eq!(duty_cycle_to_pulse(out.throttle().duty_cycle()), 1500);
    }

    #[test]
    fn test_write_pulse_routes_by_channel() {
        let mut out = outputs();
        out.write_pulse(OutputChannel::Steering, 1750).unwrap();
        out.write_pulse(OutputChannel::Throttle, 1553).unwrap();
        assert_eq!(duty_cycle_to_pulse(out.steering().duty_cycle()), 1750);
        assert_eq!(duty_cycle_to_pulse(out.throttle().duty_cycle()), 1553);
    }

    #[test]
    fn test_pulse_beyond_frame_is_rejected() {
        let mut out = outputs();
        assert_eq!(
            out.write_pulse(OutputChannel::Throttle, 25_000),
            Err("PWM error")
        );
        assert_eq!(duty_cycle_to_pulse(out.throttle().duty_cycle()), 1500);
    }
}
