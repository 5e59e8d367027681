//! Time abstraction for the control loop.
//!
//! The blink timers only need a monotonic millisecond clock. `TimeSource`
//! hides whether that comes from the Embassy time driver or from a test.

use core::cell::Cell;

/// Monotonic time source sampled once per control loop iteration.
///
/// # Example
///
/// ```
/// use rc_mixer_core::traits::{MockTime, TimeSource};
///
/// let time = MockTime::new();
/// time.advance_ms(300);
/// assert_eq!(time.now_ms(), 300);
/// assert_eq!(time.elapsed_ms_since(100), 200);
/// ```
pub trait TimeSource {
    /// Returns current time in milliseconds since system start.
    fn now_ms(&self) -> u64;

    /// Returns current time in microseconds since system start.
    fn now_us(&self) -> u64;

    /// Milliseconds elapsed since `reference_ms`, saturating at zero.
    fn elapsed_ms_since(&self, reference_ms: u64) -> u64 {
        self.now_ms().saturating_sub(reference_ms)
    }
}

/// Mock time source with manually advanced time.
///
/// Interior mutability lets a test hold a shared reference while the loop
/// under test also reads it.
#[derive(Debug, Clone, Default)]
pub struct MockTime {
    current_us: Cell<u64>,
}

impl MockTime {
    /// Creates a new `MockTime` starting at time 0.
    pub fn new() -> Self {
        Self {
            current_us: Cell::new(0),
        }
    }

    /// Creates a new `MockTime` starting at the given millisecond timestamp.
    pub fn with_initial_ms(ms: u64) -> Self {
        Self {
            current_us: Cell::new(ms * 1000),
        }
    }

    /// Sets the current time to an absolute value in milliseconds.
    pub fn set_ms(&self, ms: u64) {
        self.current_us.set(ms * 1000);
    }

    /// Advances the current time by `us` microseconds.
    pub fn advance_us(&self, us: u64) {
        self.current_us.set(self.current_us.get() + us);
    }

    /// Advances the current time by `ms` milliseconds.
    pub fn advance_ms(&self, ms: u64) {
        self.advance_us(ms * 1000);
    }
}

impl TimeSource for MockTime {
    fn now_ms(&self) -> u64 {
        self.current_us.get() / 1000
    }

    fn now_us(&self) -> u64 {
        self.current_us.get()
    }
}
