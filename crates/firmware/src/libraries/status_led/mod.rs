//! Status LEDs on GPIO outputs

use crate::platform::traits::GpioInterface;

// Re-export core status LED types
pub use rc_mixer_core::status::{StatusIndicator, StatusLed};

/// GPIO-backed status LEDs
///
/// Pins are ordered by [`StatusLed::index`]: mode, high zone, low zone.
pub struct StatusLeds<G: GpioInterface> {
    pins: [G; StatusLed::COUNT],
}

impl<G: GpioInterface> StatusLeds<G> {
    /// Take the pins and switch every LED off
    ///
    /// # Errors
    ///
    /// Returns the platform error if a pin cannot be driven.
    pub fn new(mut pins: [G; StatusLed::COUNT]) -> crate::platform::Result<Self> {
        for pin in pins.iter_mut() {
            pin.set_low()?;
        }
        Ok(Self { pins })
    }

    /// Pin driving `led`
    pub fn pin_mut(&mut self, led: StatusLed) -> &mut G {
        &mut self.pins[led.index()]
    }

    /// Current level of `led`
    pub fn is_on(&self, led: StatusLed) -> bool {
        self.pins[led.index()].read()
    }
}

impl<G: GpioInterface> StatusIndicator for StatusLeds<G> {
    fn set_led(&mut self, led: StatusLed, on: bool) -> Result<(), &'static str> {
        self.pins[led.index()].set_level(on).map_err(|e| e.as_str())
    }
}
