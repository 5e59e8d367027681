//! RP2350 pulse capture
//!
//! Busy-waits on a GPIO input, timing edges with the Embassy time driver
//! (1 MHz tick). Like a classic `pulseIn`, a pulse already in progress when
//! the call starts is skipped and the next complete one is measured.

use crate::platform::{traits::PulseInInterface, Result};
use embassy_rp::gpio::Input;
use embassy_time::Instant;

/// RP2350 receiver channel input
pub struct Rp2350PulseIn<'d> {
    pin: Input<'d>,
}

impl<'d> Rp2350PulseIn<'d> {
    /// Wrap a configured input pin
    pub fn new(pin: Input<'d>) -> Self {
        Self { pin }
    }

    /// Spin until the pin reads `high`, or the deadline passes
    fn wait_for(&self, high: bool, start: Instant, timeout_us: u64) -> bool {
        while self.pin.is_high() != high {
            if Instant::now().duration_since(start).as_micros() >= timeout_us {
                return false;
            }
        }
        true
    }
}

impl PulseInInterface for Rp2350PulseIn<'_> {
    fn measure_high(&mut self, timeout_us: u32) -> Result<Option<u32>> {
        let start = Instant::now();
        let timeout_us = u64::from(timeout_us);

        if !self.wait_for(false, start, timeout_us) || !self.wait_for(true, start, timeout_us) {
            return Ok(None);
        }
        let rise = Instant::now();
        if !self.wait_for(false, start, timeout_us) {
            return Ok(None);
        }
        let width_us = Instant::now().duration_since(rise).as_micros();
        Ok(u32::try_from(width_us).ok())
    }
}
