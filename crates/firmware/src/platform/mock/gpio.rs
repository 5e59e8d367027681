//! Mock GPIO implementation for testing

use crate::platform::{
    Result,
    error::{GpioError, PlatformError},
    traits::{GpioInterface, GpioMode},
};

/// Mock GPIO implementation
///
/// Tracks pin state (high/low) and mode for test verification.
#[derive(Debug)]
pub struct MockGpio {
    state: bool,
    mode: GpioMode,
    faulted: bool,
}

impl MockGpio {
    /// Create a new mock GPIO in output mode
    pub fn new_output() -> Self {
        Self {
            state: false,
            mode: GpioMode::OutputPushPull,
            faulted: false,
        }
    }

    /// Create a new mock GPIO in input mode
    pub fn new_input() -> Self {
        Self {
            state: false,
            mode: GpioMode::Input,
            faulted: false,
        }
    }

    /// Make every subsequent write fail with a hardware error
    pub fn set_faulted(&mut self, faulted: bool) {
        self.faulted = faulted;
    }

    fn drive(&mut self, high: bool) -> Result<()> {
        if self.faulted {
            return Err(PlatformError::Gpio(GpioError::HardwareError));
        }
        match self.mode {
            GpioMode::OutputPushPull => {
                self.state = high;
                Ok(())
            }
            GpioMode::Input => Err(PlatformError::Gpio(GpioError::InvalidMode)),
        }
    }
}

impl GpioInterface for MockGpio {
    fn set_high(&mut self) -> Result<()> {
        self.drive(true)
    }

    fn set_low(&mut self) -> Result<()> {
        self.drive(false)
    }

    fn read(&self) -> bool {
        self.state
    }

    fn mode(&self) -> GpioMode {
        self.mode
    }
}
