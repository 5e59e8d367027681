//! RP2350 GPIO implementation
//!
//! Status LEDs on Embassy-RP push-pull outputs.

use crate::platform::{
    traits::{GpioInterface, GpioMode},
    Result,
};
use embassy_rp::gpio::Output;

/// RP2350 LED output
///
/// Wraps an `embassy_rp::gpio::Output` to implement the `GpioInterface` trait.
pub struct Rp2350Led<'d> {
    pin: Output<'d>,
}

impl<'d> Rp2350Led<'d> {
    /// Wrap a configured output pin
    pub fn new(pin: Output<'d>) -> Self {
        Self { pin }
    }
}

impl GpioInterface for Rp2350Led<'_> {
    fn set_high(&mut self) -> Result<()> {
        self.pin.set_high();
        Ok(())
    }

    fn set_low(&mut self) -> Result<()> {
        self.pin.set_low();
        Ok(())
    }

    fn read(&self) -> bool {
        self.pin.is_set_high()
    }

    fn mode(&self) -> GpioMode {
        GpioMode::OutputPushPull
    }
}
