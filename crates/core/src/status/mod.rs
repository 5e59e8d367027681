//! Status LEDs and the status echo line
//!
//! Three LEDs report state: the mode LED (on in autonomous mode) and the two
//! zone LEDs driven by the blink timers. After every iteration one status
//! line is echoed on the serial link for humans watching the console; it is
//! not a protocol.

use core::fmt;

use heapless::String;

/// Status LEDs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLed {
    /// On while in autonomous mode
    Mode,
    /// Blinks while the blink trigger is in the high zone
    ZoneHigh,
    /// Blinks while the blink trigger is in the low zone
    ZoneLow,
}

impl StatusLed {
    /// Number of LEDs
    pub const COUNT: usize = 3;

    /// Dense index for per-LED tables
    pub const fn index(self) -> usize {
        match self {
            StatusLed::Mode => 0,
            StatusLed::ZoneHigh => 1,
            StatusLed::ZoneLow => 2,
        }
    }
}

/// LED output capability
pub trait StatusIndicator {
    /// Drive `led` on or off
    fn set_led(&mut self, led: StatusLed, on: bool) -> Result<(), &'static str>;
}

/// One status echo line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Pulses emitted in autonomous mode
    Auto {
        /// Steering pulse (µs)
        steering_us: u16,
        /// Throttle pulse (µs)
        throttle_us: u16,
    },
    /// Raw receiver readings in manual mode
    Manual {
        /// Steering reading (µs, 0 = absent)
        steering_in_us: u16,
        /// Throttle reading (µs, 0 = absent)
        throttle_raw_us: u16,
    },
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Auto {
                steering_us,
                throttle_us,
            } => write!(f, "AUTO → steer: {}  throttle: {}", steering_us, throttle_us),
            Status::Manual {
                steering_in_us,
                throttle_raw_us,
            } => write!(
                f,
                "MANUAL → steerIn: {}  throttleRaw: {}",
                steering_in_us, throttle_raw_us
            ),
        }
    }
}

/// Capacity of a rendered status line including the line ending
pub const STATUS_LINE_CAPACITY: usize = 64;

impl Status {
    /// Render the line with a trailing CRLF
    ///
    /// Returns `None` only if the line does not fit, which cannot happen for
    /// readings bounded by the pulse timeout.
    pub fn render(&self) -> Option<String<STATUS_LINE_CAPACITY>> {
        let mut line = String::new();
        fmt::write(&mut line, format_args!("{}\r\n", self)).ok()?;
        Some(line)
    }
}

/// Status echo sink
pub trait StatusSink {
    /// Publish one status line
    fn report(&mut self, status: &Status);
}

/// LED states recorded for tests
#[derive(Debug, Clone, Default)]
pub struct MockLeds {
    states: [bool; StatusLed::COUNT],
    fail: bool,
}

impl MockLeds {
    /// Create with all LEDs off
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state of `led`
    pub fn is_on(&self, led: StatusLed) -> bool {
        self.states[led.index()]
    }

    /// Make every subsequent write fail
    pub fn set_failing(&mut self, fail: bool) {
        self.fail = fail;
    }
}

impl StatusIndicator for MockLeds {
    fn set_led(&mut self, led: StatusLed, on: bool) -> Result<(), &'static str> {
        if self.fail {
            return Err("GPIO error");
        }
        self.states[led.index()] = on;
        Ok(())
    }
}

/// Status sink that keeps the last report
#[derive(Debug, Clone, Default)]
pub struct MockStatusSink {
    last: Option<Status>,
    count: u32,
}

impl MockStatusSink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent status
    pub fn last(&self) -> Option<Status> {
        self.last
    }

    /// Number of reports received
    pub fn count(&self) -> u32 {
        self.count
    }
}

impl StatusSink for MockStatusSink {
    fn report(&mut self, status: &Status) {
        self.last = Some(*status);
        self.count += 1;
    }
}
