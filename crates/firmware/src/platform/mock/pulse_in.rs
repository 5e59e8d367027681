//! Mock pulse capture implementation for testing

use crate::platform::{Result, error::PlatformError, traits::PulseInInterface};

/// Mock pulse capture
///
/// Returns the configured pulse width on every measurement. A width of
/// `None` simulates an unplugged or silent channel.
#[derive(Debug, Default)]
pub struct MockPulseIn {
    width_us: Option<u32>,
    error: Option<PlatformError>,
    measurements: u32,
    last_timeout_us: u32,
}

impl MockPulseIn {
    /// Create a mock channel with no signal
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock channel reporting `width_us`
    pub fn with_width(width_us: u32) -> Self {
        Self {
            width_us: Some(width_us),
            ..Self::default()
        }
    }

    /// Change the simulated pulse width
    pub fn set_width(&mut self, width_us: Option<u32>) {
        self.width_us = width_us;
    }

    /// Make measurements fail with `error`
    pub fn set_error(&mut self, error: Option<PlatformError>) {
        self.error = error;
    }

    /// Number of measurements taken
    pub fn measurements(&self) -> u32 {
        self.measurements
    }

    /// Timeout passed to the latest measurement
    pub fn last_timeout_us(&self) -> u32 {
        self.last_timeout_us
    }
}

impl PulseInInterface for MockPulseIn {
    fn measure_high(&mut self, timeout_us: u32) -> Result<Option<u32>> {
        self.measurements += 1;
        self.last_timeout_us = timeout_us;
        if let Some(error) = self.error {
            return Err(error);
        }
        Ok(self.width_us)
    }
}
