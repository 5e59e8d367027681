//! RP2350 PWM implementation
//!
//! Servo-rate PWM on one channel (A) of an Embassy-RP PWM slice.

use crate::platform::{
    error::{PlatformError, PwmError},
    traits::{PwmConfig, PwmInterface},
    Result,
};
use embassy_rp::pwm::{Config, Pwm};

/// RP2350 system clock (Embassy default)
pub const SYS_CLOCK_HZ: u32 = 150_000_000;

/// Integer clock divider for servo-rate PWM
pub const SERVO_PWM_DIVIDER: u8 = 64;

/// Counter wrap value: 150 MHz / 64 / (46874 + 1) = 50 Hz
pub const SERVO_PWM_TOP: u16 = 46_874;

/// RP2350 PWM channel A output
pub struct Rp2350Pwm<'d> {
    pwm: Pwm<'d>,
    config: Config,
    duty_cycle: f32,
    frequency: u32,
}

impl<'d> Rp2350Pwm<'d> {
    /// Create from a slice configured with [`servo_slice_config`]
    ///
    /// The output stays disabled until `enable` is called.
    pub fn new(pwm: Pwm<'d>, config: PwmConfig) -> Self {
        let mut slice_config = servo_slice_config();
        slice_config.compare_a = duty_to_compare(config.duty_cycle, SERVO_PWM_TOP);
        let mut out = Self {
            pwm,
            config: slice_config,
            duty_cycle: config.duty_cycle,
            frequency: SYS_CLOCK_HZ
                / (u32::from(SERVO_PWM_DIVIDER) * (u32::from(SERVO_PWM_TOP) + 1)),
        };
        out.apply();
        out
    }

    fn apply(&mut self) {
        self.pwm.set_config(&self.config);
    }
}

/// Slice configuration for 50 Hz output, disabled, compare at zero
pub fn servo_slice_config() -> Config {
    let mut config = Config::default();
    config.divider = SERVO_PWM_DIVIDER.into();
    config.top = SERVO_PWM_TOP;
    config.compare_a = 0;
    config.enable = false;
    config
}

/// Compare value for `duty` at counter wrap `top`
pub fn duty_to_compare(duty: f32, top: u16) -> u16 {
    (duty * (u32::from(top) + 1) as f32) as u16
}

impl PwmInterface for Rp2350Pwm<'_> {
    fn set_duty_cycle(&mut self, duty_cycle: f32) -> Result<()> {
        if !(0.0..=1.0).contains(&duty_cycle) {
            return Err(PlatformError::Pwm(PwmError::InvalidDutyCycle));
        }
        self.duty_cycle = duty_cycle;
        self.config.compare_a = duty_to_compare(duty_cycle, self.config.top);
        self.apply();
        Ok(())
    }

    fn duty_cycle(&self) -> f32 {
        self.duty_cycle
    }

    fn frequency(&self) -> u32 {
        self.frequency
    }

    fn enable(&mut self) {
        self.config.enable = true;
        self.apply();
    }

    fn is_enabled(&self) -> bool {
        self.config.enable
    }
}
