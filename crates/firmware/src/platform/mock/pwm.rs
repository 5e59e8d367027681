//! Mock PWM implementation for testing

use crate::platform::{
    Result,
    error::{PlatformError, PwmError},
    traits::{PwmConfig, PwmInterface},
};

/// Mock PWM implementation
///
/// Tracks PWM state (duty cycle, frequency, enabled) for test verification.
#[derive(Debug)]
pub struct MockPwm {
    duty_cycle: f32,
    frequency: u32,
    enabled: bool,
}

impl MockPwm {
    /// Create a new mock PWM
    pub fn new(config: PwmConfig) -> Self {
        Self {
            duty_cycle: config.duty_cycle,
            frequency: config.frequency,
            enabled: false,
        }
    }
}

impl PwmInterface for MockPwm {
    fn set_duty_cycle(&mut self, duty_cycle: f32) -> Result<()> {
        if !(0.0..=1.0).contains(&duty_cycle) {
            return Err(PlatformError::Pwm(PwmError::InvalidDutyCycle));
        }
        self.duty_cycle = duty_cycle;
        Ok(())
    }

    fn duty_cycle(&self) -> f32 {
        self.duty_cycle
    }

    fn frequency(&self) -> u32 {
        self.frequency
    }

    fn enable(&mut self) {
        self.enabled = true;
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rc_mixer_core::servo::duty_cycle_to_pulse;

    #[test]
    fn test_mock_pwm_defaults_to_neutral() {
        let pwm = MockPwm::new(PwmConfig::default());
        assert_eq!(pwm.frequency(), 50);
        assert_eq!(duty_cycle_to_pulse(pwm.duty_cycle()), 1500);
        assert!(!pwm.is_enabled());
    }

    #[test]
    fn test_mock_pwm_set_pulse_us() {
        let mut pwm = MockPwm::new(PwmConfig::default());
        pwm.set_pulse_us(1620).unwrap();
        assert_eq!(duty_cycle_to_pulse(pwm.duty_cycle()), 1620);
    }

    #[test]
    fn test_mock_pwm_invalid_duty_cycle() {
        let mut pwm = MockPwm::new(PwmConfig::default());
        assert_eq!(
            pwm.set_duty_cycle(1.5),
            Err(PlatformError::Pwm(PwmError::InvalidDutyCycle))
        );
    }
}
