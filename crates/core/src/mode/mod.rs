//! Manual / autonomous mode arbitration
//!
//! The mode is re-derived from the mode switch on every iteration. There is
//! no debouncing or hysteresis: a reading that hovers around the threshold
//! can flip the active path from one iteration to the next. Nothing persists
//! between iterations except the mode LED.

/// Active control path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriveMode {
    /// Actuators follow the receiver sticks
    Manual,
    /// Actuators follow commands from the serial link
    Autonomous,
}

impl DriveMode {
    /// Decide the mode from the mode-switch reading
    ///
    /// Autonomous only when the reading is strictly above `threshold_us`;
    /// a missing signal (0) therefore selects manual.
    pub fn from_pulse(reading_us: u16, threshold_us: u16) -> Self {
        if reading_us > threshold_us {
            DriveMode::Autonomous
        } else {
            DriveMode::Manual
        }
    }

    /// Mode LED state (on = autonomous)
    pub fn led_on(self) -> bool {
        self == DriveMode::Autonomous
    }

    /// Mode name for logging and the status echo
    pub fn name(self) -> &'static str {
        match self {
            DriveMode::Manual => "MANUAL",
            DriveMode::Autonomous => "AUTO",
        }
    }
}
