//! RC receiver pulse measurement
//!
//! The receiver encodes each channel as a pulse width in microseconds
//! (nominally 1000-2000, 1500 = center). Measuring a pulse is the only
//! blocking operation in the control loop: every read stalls the loop for up
//! to the timeout, so an iteration costs at most
//! `channels read × PULSE_TIMEOUT_US`.
//!
//! Readings are reported as `u16` microseconds with `0` meaning
//! "no pulse within the timeout". Callers decide what absence means for
//! their channel (ignore it, or treat it as neutral).

use heapless::Vec;

/// Receiver input channels used by the mixer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputChannel {
    /// Steering stick (CH1)
    Steering,
    /// Throttle stick (CH2)
    Throttle,
    /// Manual / autonomous switch (SwA, CH8)
    Mode,
    /// Zone LED blink trigger (SwC, CH5), a.k.a. the low-zone trigger
    BlinkTrigger,
    /// Zone LED solid-on override (SwD, CH7), a.k.a. the high-zone trigger
    LedOverride,
}

impl InputChannel {
    /// Number of input channels
    pub const COUNT: usize = 5;

    /// All channels in index order
    pub const ALL: [InputChannel; Self::COUNT] = [
        InputChannel::Steering,
        InputChannel::Throttle,
        InputChannel::Mode,
        InputChannel::BlinkTrigger,
        InputChannel::LedOverride,
    ];

    /// Dense index for per-channel tables
    pub const fn index(self) -> usize {
        match self {
            InputChannel::Steering => 0,
            InputChannel::Throttle => 1,
            InputChannel::Mode => 2,
            InputChannel::BlinkTrigger => 3,
            InputChannel::LedOverride => 4,
        }
    }

    /// Short name for logging
    pub const fn name(self) -> &'static str {
        match self {
            InputChannel::Steering => "steering",
            InputChannel::Throttle => "throttle",
            InputChannel::Mode => "mode",
            InputChannel::BlinkTrigger => "blink",
            InputChannel::LedOverride => "override",
        }
    }
}

/// Pulse measurement capability
///
/// Implementations block until a complete high pulse has been observed on
/// `channel` or `timeout_us` has elapsed.
pub trait PulseSource {
    /// Measure one high pulse
    ///
    /// # Returns
    ///
    /// Pulse width in microseconds, or `None` if no pulse was seen before
    /// the timeout.
    fn measure(&mut self, channel: InputChannel, timeout_us: u32) -> Option<u16>;
}

/// Reads receiver channels with a fixed timeout
///
/// Collapses "no pulse" and any reading longer than the timeout into `0`,
/// so every reading the loop sees lies in `0..=timeout_us`.
#[derive(Debug, Clone, Copy)]
pub struct PulseReader {
    timeout_us: u32,
}

impl PulseReader {
    /// Create a reader with the given per-channel timeout
    pub const fn new(timeout_us: u32) -> Self {
        Self { timeout_us }
    }

    /// Per-channel timeout in microseconds
    pub const fn timeout_us(&self) -> u32 {
        self.timeout_us
    }

    /// Measure `channel`, returning `0` when the signal is absent
    pub fn read(&self, source: &mut dyn PulseSource, channel: InputChannel) -> u16 {
        match source.measure(channel, self.timeout_us) {
            Some(pulse_us) if u32::from(pulse_us) <= self.timeout_us => pulse_us,
            _ => 0,
        }
    }
}

/// Capacity of the mock read log
const MOCK_READ_LOG: usize = 32;

/// Mock pulse source with fixed per-channel readings
///
/// A reading of `0` simulates a missing signal. Every measurement is logged
/// so tests can check which channels an iteration touched.
#[derive(Debug, Clone, Default)]
pub struct MockPulseSource {
    readings: [u16; InputChannel::COUNT],
    reads: Vec<InputChannel, MOCK_READ_LOG>,
}

impl MockPulseSource {
    /// Create a mock with every channel absent
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock with every channel centered at 1500 µs
    pub fn centered() -> Self {
        Self {
            readings: [1500; InputChannel::COUNT],
            reads: Vec::new(),
        }
    }

    /// Set the reading returned for `channel` (0 = absent)
    pub fn set(&mut self, channel: InputChannel, pulse_us: u16) {
        self.readings[channel.index()] = pulse_us;
    }

    /// Channels measured since the last `clear_reads`
    pub fn reads(&self) -> &[InputChannel] {
        &self.reads
    }

    /// Forget the read log
    pub fn clear_reads(&mut self) {
        self.reads.clear();
    }
}

impl PulseSource for MockPulseSource {
    fn measure(&mut self, channel: InputChannel, _timeout_us: u32) -> Option<u16> {
        // Oldest entries win once the log is full
        let _ = self.reads.push(channel);
        match self.readings[channel.index()] {
            0 => None,
            pulse_us => Some(pulse_us),
        }
    }
}
