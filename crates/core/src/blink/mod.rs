//! Zone LED blink timer
//!
//! Each zone LED owns one `BlinkTimer`. While its trigger holds, the LED
//! toggles once every `interval_ms`; the moment the trigger drops, the LED
//! goes dark and the timer re-arms to the current time, so a fresh trigger
//! waits a full interval before its first toggle.
//!
//! ```text
//!            trigger held, ≥ interval since last toggle
//!          ┌───────────────┐
//!          ▼               │ toggle, last_toggle = now
//!   ┌─────────┐  trigger  ┌──────────┐
//!   │   OFF   │──────────▶│ BLINKING │
//!   └─────────┘◀──────────└──────────┘
//!        ▲    trigger lost:  output low, last_toggle = now
//!        └─ trigger lost (every check)
//! ```

/// Which receiver band a zone LED reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlinkZone {
    /// Reading at or above the high threshold (stick near 2000 µs)
    High,
    /// Reading in `(0, low threshold]` (stick near 1000 µs); 0 is "no signal"
    Low,
}

impl BlinkZone {
    /// Evaluate the trigger for a blink-channel reading
    ///
    /// # Arguments
    ///
    /// * `reading_us` - Blink trigger channel reading (0 = absent)
    /// * `high_us` - High zone threshold (inclusive)
    /// * `low_us` - Low zone threshold (inclusive)
    pub fn is_triggered(self, reading_us: u16, high_us: u16, low_us: u16) -> bool {
        match self {
            BlinkZone::High => reading_us >= high_us,
            BlinkZone::Low => reading_us > 0 && reading_us <= low_us,
        }
    }
}

/// Periodic toggle state for one LED
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlinkTimer {
    interval_ms: u64,
    last_toggle_ms: u64,
    output: bool,
}

impl BlinkTimer {
    /// Create a timer that starts dark and armed at time 0
    pub const fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last_toggle_ms: 0,
            output: false,
        }
    }

    /// Advance the state machine
    ///
    /// # Arguments
    ///
    /// * `triggered` - Whether this LED's trigger condition holds now
    /// * `now_ms` - Current time (ms)
    ///
    /// # Returns
    ///
    /// LED output after the update
    pub fn update(&mut self, triggered: bool, now_ms: u64) -> bool {
        if triggered {
            if now_ms.saturating_sub(self.last_toggle_ms) >= self.interval_ms {
                self.last_toggle_ms = now_ms;
                self.output = !self.output;
            }
        } else {
            self.output = false;
            self.last_toggle_ms = now_ms;
        }
        self.output
    }

    /// Current LED output
    pub fn output(&self) -> bool {
        self.output
    }

    /// Timestamp of the last toggle or re-arm (ms)
    pub fn last_toggle_ms(&self) -> u64 {
        self.last_toggle_ms
    }

    /// Half-period (ms)
    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_triggers() {
        assert!(BlinkZone::High.is_triggered(1900, 1900, 1100));
        assert!(BlinkZone::High.is_triggered(2000, 1900, 1100));
        assert!(!BlinkZone::High.is_triggered(1899, 1900, 1100));

        assert!(BlinkZone::Low.is_triggered(1100, 1900, 1100));
        assert!(BlinkZone::Low.is_triggered(1, 1900, 1100));
        assert!(!BlinkZone::Low.is_triggered(1101, 1900, 1100));
        // No signal never blinks the low LED
        assert!(!BlinkZone::Low.is_triggered(0, 1900, 1100));
    }

    #[test]
    fn test_toggles_every_interval_while_triggered() {
        let mut timer = BlinkTimer::new(300);

        assert!(timer.update(true, 300));
        assert!(timer.update(true, 450));
        assert!(!timer.update(true, 600));
        assert!(!timer.update(true, 899));
        assert!(timer.update(true, 900));
        assert_eq!(timer.last_toggle_ms(), 900);
    }

    #[test]
    fn test_last_toggle_only_moves_on_toggle() {
        let mut timer = BlinkTimer::new(300);
        timer.update(true, 300);
        timer.update(true, 400);
        timer.update(true, 500);
        assert_eq!(timer.last_toggle_ms(), 300);
    }

    #[test]
    fn test_release_forces_low_and_rearms() {
        let mut timer = BlinkTimer::new(300);
        assert!(timer.update(true, 300));

        assert!(!timer.update(false, 350));
        assert_eq!(timer.last_toggle_ms(), 350);

        // Re-trigger sooner than a full interval after release: stays dark
        assert!(!timer.update(true, 400));
        assert!(!timer.update(true, 649));
        assert!(timer.update(true, 650));
    }

    #[test]
    fn test_idle_timer_keeps_rearming() {
        let mut timer = BlinkTimer::new(300);
        for now in [100, 1_000, 10_000] {
            assert!(!timer.update(false, now));
            assert_eq!(timer.last_toggle_ms(), now);
        }
        assert!(!timer.update(true, 10_299));
        assert!(timer.update(true, 10_300));
    }
}
