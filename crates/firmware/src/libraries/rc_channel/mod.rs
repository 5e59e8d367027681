//! RC receiver inputs (firmware wrapper)
//!
//! Binds one pulse capture pin per receiver channel and exposes them to the
//! control loop as a core `PulseSource`. All pulse interpretation lives in
//! `rc_mixer_core::rc`.

use crate::platform::traits::PulseInInterface;

// Re-export core RC types
pub use rc_mixer_core::rc::{InputChannel, PulseReader, PulseSource};

/// Receiver channel inputs
///
/// Pins are ordered by [`InputChannel::index`]: steering, throttle, mode,
/// blink trigger, LED override.
pub struct ReceiverInputs<P: PulseInInterface> {
    pins: [P; InputChannel::COUNT],
    capture_errors: u32,
}

impl<P: PulseInInterface> ReceiverInputs<P> {
    /// Create from pins in channel index order
    pub fn new(pins: [P; InputChannel::COUNT]) -> Self {
        Self {
            pins,
            capture_errors: 0,
        }
    }

    /// Pin bound to `channel`
    pub fn pin(&self, channel: InputChannel) -> &P {
        &self.pins[channel.index()]
    }

    /// Mutable pin bound to `channel`
    pub fn pin_mut(&mut self, channel: InputChannel) -> &mut P {
        &mut self.pins[channel.index()]
    }

    /// Captures that failed at the platform level
    pub fn capture_errors(&self) -> u32 {
        self.capture_errors
    }
}

impl<P: PulseInInterface> PulseSource for ReceiverInputs<P> {
    fn measure(&mut self, channel: InputChannel, timeout_us: u32) -> Option<u16> {
        match self.pins[channel.index()].measure_high(timeout_us) {
            Ok(Some(width_us)) => u16::try_from(width_us).ok(),
            Ok(None) => None,
            Err(e) => {
                self.capture_errors = self.capture_errors.saturating_add(1);
                crate::log_warn!("Pulse capture failed on {}: {}", channel.name(), e.as_str());
                None
            }
        }
    }
}
