//! Steering servo and throttle ESC output
//!
//! Actuators take a raw pulse width in microseconds. Range limiting is done
//! before this layer (see [`crate::limiter`]); implementations only turn the
//! pulse into hardware output.
//!
//! # Design
//!
//! This module is pure `no_std` with no feature gates. The PWM-backed
//! implementation lives in the firmware crate.

/// Servo PWM frame period at 50 Hz (µs)
pub const SERVO_PERIOD_US: u32 = 20_000;

/// Actuator outputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputChannel {
    /// Steering servo
    Steering,
    /// Throttle ESC
    Throttle,
}

impl OutputChannel {
    /// Short name for logging
    pub const fn name(self) -> &'static str {
        match self {
            OutputChannel::Steering => "steering",
            OutputChannel::Throttle => "throttle",
        }
    }
}

/// Pulse output capability
pub trait PulseOutput {
    /// Emit `pulse_us` on `channel` until the next write
    fn write_pulse(&mut self, channel: OutputChannel, pulse_us: u16) -> Result<(), &'static str>;
}

/// Convert pulse width to PWM duty cycle
///
/// For 50 Hz PWM (20 ms period):
/// - 1000 μs = 5.0% duty cycle
/// - 1500 μs = 7.5% duty cycle
/// - 2000 μs = 10.0% duty cycle
pub fn pulse_to_duty_cycle(pulse_us: u16) -> f32 {
    pulse_us as f32 / SERVO_PERIOD_US as f32
}

/// Convert duty cycle to pulse width
///
/// Inverse of `pulse_to_duty_cycle`, rounded to the nearest microsecond.
pub fn duty_cycle_to_pulse(duty: f32) -> u16 {
    (duty * SERVO_PERIOD_US as f32 + 0.5) as u16
}

/// Recorded actuator writes for tests
#[derive(Debug, Clone, Default)]
pub struct MockOutputs {
    steering_us: Option<u16>,
    throttle_us: Option<u16>,
    writes: u32,
    fail: bool,
}

impl MockOutputs {
    /// Create outputs that have never been written
    pub fn new() -> Self {
        Self::default()
    }

    /// Last steering pulse written
    pub fn steering(&self) -> Option<u16> {
        self.steering_us
    }

    /// Last throttle pulse written
    pub fn throttle(&self) -> Option<u16> {
        self.throttle_us
    }

    /// Total successful writes
    pub fn writes(&self) -> u32 {
        self.writes
    }

    /// Make every subsequent write fail
    pub fn set_failing(&mut self, fail: bool) {
        self.fail = fail;
    }
}

impl PulseOutput for MockOutputs {
    fn write_pulse(&mut self, channel: OutputChannel, pulse_us: u16) -> Result<(), &'static str> {
        if self.fail {
            return Err("PWM error");
        }
        match channel {
            OutputChannel::Steering => self.steering_us = Some(pulse_us),
            OutputChannel::Throttle => self.throttle_us = Some(pulse_us),
        }
        self.writes += 1;
        Ok(())
    }
}
