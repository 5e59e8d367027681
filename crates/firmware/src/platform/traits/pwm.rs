//! PWM interface trait
//!
//! This module defines the PWM output interface that platform implementations must provide.

use crate::platform::Result;
use rc_mixer_core::servo::pulse_to_duty_cycle;

/// PWM configuration
#[derive(Debug, Clone, Copy)]
pub struct PwmConfig {
    /// PWM frequency in Hz
    pub frequency: u32,
    /// Initial duty cycle (0.0 = 0%, 1.0 = 100%)
    pub duty_cycle: f32,
}

impl Default for PwmConfig {
    fn default() -> Self {
        Self {
            frequency: 50, // 50 Hz for servos
            duty_cycle: pulse_to_duty_cycle(1500),
        }
    }
}

/// PWM interface trait
///
/// # Safety Invariants
///
/// - PWM peripheral must be initialized before use
/// - Only one owner per PWM channel
/// - Duty cycle must be in range [0.0, 1.0]
pub trait PwmInterface {
    /// Set PWM duty cycle
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Pwm(PwmError::InvalidDutyCycle)` if the duty cycle
    /// is outside the valid range [0.0, 1.0].
    fn set_duty_cycle(&mut self, duty_cycle: f32) -> Result<()>;

    /// Get current duty cycle
    fn duty_cycle(&self) -> f32;

    /// Get current frequency in Hz
    fn frequency(&self) -> u32;

    /// Set a servo pulse width (µs) at a 50 Hz frame
    fn set_pulse_us(&mut self, pulse_us: u16) -> Result<()> {
        self.set_duty_cycle(pulse_to_duty_cycle(pulse_us))
    }

    /// Enable PWM output
    fn enable(&mut self);

    /// Check if PWM is enabled
    fn is_enabled(&self) -> bool;
}
