//! Control loop
//!
//! One call to [`ControlLoop::step`] runs a complete iteration:
//!
//! 1. Read the LED override channel. Above its threshold both zone LEDs are
//!    forced on and the blink trigger is not read at all.
//! 2. Otherwise read the blink trigger and advance both blink timers.
//! 3. Read the mode switch and drive the mode LED.
//! 4. Autonomous: parse at most one buffered command line, limit and map it,
//!    and always write both actuators (neutral when no valid command).
//! 5. Manual: pass valid steering through unchanged, re-center valid
//!    throttle with the manual policy, skip out-of-range channels, and drop
//!    any pending serial input.
//!
//! Every iteration ends with one status report. Nothing fails the loop:
//! timeouts read as 0, bad lines fall back to neutral, and write errors are
//! counted in the returned [`Iteration`].

mod stats;

pub use stats::LoopStats;

use crate::blink::{BlinkTimer, BlinkZone};
use crate::command::{self, CommandLink, DriveCommand, LineReader};
use crate::config::{MixerConfig, NEUTRAL_PULSE_US};
use crate::limiter::SpeedLimiter;
use crate::mode::DriveMode;
use crate::rc::{InputChannel, PulseReader, PulseSource};
use crate::servo::{OutputChannel, PulseOutput};
use crate::status::{Status, StatusIndicator, StatusLed, StatusSink};
use crate::traits::TimeSource;

/// Hardware capabilities used by one iteration
pub struct MixerIo<'a> {
    /// Receiver pulse measurement
    pub pulses: &'a mut dyn PulseSource,
    /// Steering servo and throttle ESC
    pub outputs: &'a mut dyn PulseOutput,
    /// Status LEDs
    pub leds: &'a mut dyn StatusIndicator,
    /// Serial command input
    pub link: &'a mut dyn CommandLink,
    /// Status echo output
    pub status: &'a mut dyn StatusSink,
}

/// What happened to serial input this iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// No complete line was available (always the case in manual mode)
    NoLine,
    /// A line parsed into a command
    Accepted(DriveCommand),
    /// A line arrived but did not parse; neutral pulses were used
    Rejected,
}

/// LED states written this iteration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LedState {
    /// Mode LED
    pub mode: bool,
    /// High-zone LED
    pub zone_high: bool,
    /// Low-zone LED
    pub zone_low: bool,
}

/// Summary of one control loop iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Iteration {
    /// Path taken
    pub mode: DriveMode,
    /// Mode differs from the previous iteration
    pub mode_changed: bool,
    /// Steering pulse commanded, `None` if the actuator was left alone
    pub steering_us: Option<u16>,
    /// Throttle pulse commanded, `None` if the actuator was left alone
    pub throttle_us: Option<u16>,
    /// Serial command handling
    pub command: CommandOutcome,
    /// LED outputs
    pub leds: LedState,
    /// Status line reported
    pub status: Status,
    /// Channel reads that returned no pulse
    pub signal_timeouts: u8,
    /// Actuator or LED writes that failed
    pub write_failures: u8,
    /// Message of the last failed write
    pub last_error: Option<&'static str>,
}

/// Per-iteration bookkeeping
#[derive(Default)]
struct Tally {
    signal_timeouts: u8,
    write_failures: u8,
    last_error: Option<&'static str>,
}

impl Tally {
    fn check(&mut self, result: Result<(), &'static str>) {
        if let Err(e) = result {
            self.write_failures = self.write_failures.saturating_add(1);
            self.last_error = Some(e);
        }
    }
}

/// Signal-to-actuation control loop
///
/// Owns the two zone blink timers and the serial line buffer; everything
/// else is re-derived from the inputs on each iteration.
#[derive(Debug)]
pub struct ControlLoop {
    config: MixerConfig,
    reader: PulseReader,
    limiter: SpeedLimiter,
    zone_high: BlinkTimer,
    zone_low: BlinkTimer,
    lines: LineReader,
    last_mode: Option<DriveMode>,
    stats: LoopStats,
}

impl ControlLoop {
    /// Create a loop from the mixer configuration
    pub fn new(config: MixerConfig) -> Self {
        Self {
            config,
            reader: PulseReader::new(config.pulse_timeout_us),
            limiter: SpeedLimiter::new(config),
            zone_high: BlinkTimer::new(config.blink_interval_ms),
            zone_low: BlinkTimer::new(config.blink_interval_ms),
            lines: LineReader::new(),
            last_mode: None,
            stats: LoopStats::default(),
        }
    }

    /// Configuration in use
    pub fn config(&self) -> &MixerConfig {
        &self.config
    }

    /// Counters accumulated so far
    pub fn stats(&self) -> &LoopStats {
        &self.stats
    }

    /// Mode chosen by the most recent iteration
    pub fn last_mode(&self) -> Option<DriveMode> {
        self.last_mode
    }

    /// Run one iteration using `time` as the clock
    pub fn tick<T: TimeSource>(&mut self, io: &mut MixerIo<'_>, time: &T) -> Iteration {
        self.step(io, time.now_ms())
    }

    /// Run one iteration at `now_ms`
    pub fn step(&mut self, io: &mut MixerIo<'_>, now_ms: u64) -> Iteration {
        let mut tally = Tally::default();

        // Zone LEDs
        let override_us = self.read(io, InputChannel::LedOverride, &mut tally);
        let (zone_high, zone_low) = if override_us > self.config.override_threshold_us {
            (true, true)
        } else {
            let trigger_us = self.read(io, InputChannel::BlinkTrigger, &mut tally);
            let high = BlinkZone::High.is_triggered(
                trigger_us,
                self.config.high_zone_us,
                self.config.low_zone_us,
            );
            let low = BlinkZone::Low.is_triggered(
                trigger_us,
                self.config.high_zone_us,
                self.config.low_zone_us,
            );
            (
                self.zone_high.update(high, now_ms),
                self.zone_low.update(low, now_ms),
            )
        };
        tally.check(io.leds.set_led(StatusLed::ZoneHigh, zone_high));
        tally.check(io.leds.set_led(StatusLed::ZoneLow, zone_low));

        // Mode
        let mode_us = self.read(io, InputChannel::Mode, &mut tally);
        let mode = DriveMode::from_pulse(mode_us, self.config.mode_threshold_us);
        tally.check(io.leds.set_led(StatusLed::Mode, mode.led_on()));
        let mode_changed = self.last_mode.is_some_and(|last| last != mode);
        self.last_mode = Some(mode);

        let (steering_us, throttle_us, command, status) = match mode {
            DriveMode::Autonomous => self.run_autonomous(io, &mut tally),
            DriveMode::Manual => self.run_manual(io, &mut tally),
        };
        io.status.report(&status);

        let iteration = Iteration {
            mode,
            mode_changed,
            steering_us,
            throttle_us,
            command,
            leds: LedState {
                mode: mode.led_on(),
                zone_high,
                zone_low,
            },
            status,
            signal_timeouts: tally.signal_timeouts,
            write_failures: tally.write_failures,
            last_error: tally.last_error,
        };
        self.stats.record(&iteration);
        iteration
    }

    fn read(&self, io: &mut MixerIo<'_>, channel: InputChannel, tally: &mut Tally) -> u16 {
        let pulse_us = self.reader.read(io.pulses, channel);
        if pulse_us == 0 {
            tally.signal_timeouts = tally.signal_timeouts.saturating_add(1);
        }
        pulse_us
    }

    fn run_autonomous(
        &mut self,
        io: &mut MixerIo<'_>,
        tally: &mut Tally,
    ) -> (Option<u16>, Option<u16>, CommandOutcome, Status) {
        let mut steering_us = NEUTRAL_PULSE_US;
        let mut throttle_us = NEUTRAL_PULSE_US;

        let outcome = match self.lines.poll(io.link) {
            None => CommandOutcome::NoLine,
            Some(line) => match command::parse_bytes(&line) {
                Some(cmd) => {
                    let steering = self.limiter.limit_steering(cmd.steering);
                    let throttle = self.limiter.limit_throttle(cmd.throttle);
                    steering_us = self.limiter.steering_to_pulse(steering);
                    throttle_us = self.limiter.throttle_to_pulse(throttle);
                    CommandOutcome::Accepted(cmd)
                }
                None => CommandOutcome::Rejected,
            },
        };

        tally.check(io.outputs.write_pulse(OutputChannel::Steering, steering_us));
        tally.check(io.outputs.write_pulse(OutputChannel::Throttle, throttle_us));

        let status = Status::Auto {
            steering_us,
            throttle_us,
        };
        (Some(steering_us), Some(throttle_us), outcome, status)
    }

    fn run_manual(
        &mut self,
        io: &mut MixerIo<'_>,
        tally: &mut Tally,
    ) -> (Option<u16>, Option<u16>, CommandOutcome, Status) {
        let steering_in_us = self.read(io, InputChannel::Steering, tally);
        let steering_us = if self.config.is_valid_pulse(steering_in_us) {
            tally.check(io.outputs.write_pulse(OutputChannel::Steering, steering_in_us));
            Some(steering_in_us)
        } else {
            None
        };

        let throttle_raw_us = self.read(io, InputChannel::Throttle, tally);
        let throttle_us = if self.config.is_valid_pulse(throttle_raw_us) {
            let pulse_us = self.limiter.manual_throttle_pulse(throttle_raw_us);
            tally.check(io.outputs.write_pulse(OutputChannel::Throttle, pulse_us));
            Some(pulse_us)
        } else {
            None
        };

        // Autonomous input must not pile up while the pilot is driving
        self.lines.discard(io.link);

        let status = Status::Manual {
            steering_in_us,
            throttle_raw_us,
        };
        (steering_us, throttle_us, CommandOutcome::NoLine, status)
    }
}

impl Default for ControlLoop {
    fn default() -> Self {
        Self::new(MixerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::MockLink;
    use crate::rc::MockPulseSource;
    use crate::servo::MockOutputs;
    use crate::status::{MockLeds, MockStatusSink};

    struct Rig {
        pulses: MockPulseSource,
        outputs: MockOutputs,
        leds: MockLeds,
        link: MockLink,
        status: MockStatusSink,
    }

    impl Rig {
        fn new() -> Self {
            let mut pulses = MockPulseSource::centered();
            pulses.set(InputChannel::LedOverride, 1000);
            Self {
                pulses,
                outputs: MockOutputs::new(),
                leds: MockLeds::new(),
                link: MockLink::new(),
                status: MockStatusSink::new(),
            }
        }

        fn step(&mut self, control: &mut ControlLoop, now_ms: u64) -> Iteration {
            let mut io = MixerIo {
                pulses: &mut self.pulses,
                outputs: &mut self.outputs,
                leds: &mut self.leds,
                link: &mut self.link,
                status: &mut self.status,
            };
            control.step(&mut io, now_ms)
        }
    }

    #[test]
    fn test_autonomous_command_is_limited_and_mapped() {
        let mut rig = Rig::new();
        let mut control = ControlLoop::default();
        rig.pulses.set(InputChannel::Mode, 1600);
        rig.link.inject(b"50,-30\n");

        let it = rig.step(&mut control, 0);
        assert_eq!(it.mode, DriveMode::Autonomous);
        assert_eq!(it.command, CommandOutcome::Accepted(DriveCommand::new(50, -30)));
        assert_eq!(it.steering_us, Some(1750));
        assert_eq!(it.throttle_us, Some(1328));
        assert_eq!(rig.outputs.steering(), Some(1750));
        assert_eq!(rig.outputs.throttle(), Some(1328));
        assert!(rig.leds.is_on(StatusLed::Mode));
    }

    #[test]
    fn test_autonomous_without_line_writes_neutral() {
        let mut rig = Rig::new();
        let mut control = ControlLoop::default();
        rig.pulses.set(InputChannel::Mode, 1600);

        let it = rig.step(&mut control, 0);
        assert_eq!(it.command, CommandOutcome::NoLine);
        assert_eq!(rig.outputs.steering(), Some(1500));
        assert_eq!(rig.outputs.throttle(), Some(1500));
        assert_eq!(
            it.status,
            Status::Auto {
                steering_us: 1500,
                throttle_us: 1500
            }
        );
    }

    #[test]
    fn test_rejected_line_falls_back_to_neutral_once() {
        let mut rig = Rig::new();
        let mut control = ControlLoop::default();
        rig.pulses.set(InputChannel::Mode, 1600);

        rig.link.inject(b"80,20\n");
        rig.step(&mut control, 0);
        assert_eq!(rig.outputs.steering(), Some(1900));

        rig.link.inject(b"1,2,3\n");
        let it = rig.step(&mut control, 10);
        assert_eq!(it.command, CommandOutcome::Rejected);
        assert_eq!(rig.outputs.steering(), Some(1500));
        assert_eq!(rig.outputs.throttle(), Some(1500));
    }

    #[test]
    fn test_manual_passthrough() {
        let mut rig = Rig::new();
        let mut control = ControlLoop::default();
        rig.pulses.set(InputChannel::Mode, 1400);
        rig.pulses.set(InputChannel::Steering, 1234);
        rig.pulses.set(InputChannel::Throttle, 1800);

        let it = rig.step(&mut control, 0);
        assert_eq!(it.mode, DriveMode::Manual);
        assert_eq!(rig.outputs.steering(), Some(1234));
        assert_eq!(rig.outputs.throttle(), Some(1544));
        assert!(!rig.leds.is_on(StatusLed::Mode));
        assert_eq!(
            it.status,
            Status::Manual {
                steering_in_us: 1234,
                throttle_raw_us: 1800
            }
        );
    }

    #[test]
    fn test_manual_skips_out_of_range_channels() {
        let mut rig = Rig::new();
        let mut control = ControlLoop::default();
        rig.pulses.set(InputChannel::Mode, 1400);
        rig.pulses.set(InputChannel::Steering, 1300);
        rig.pulses.set(InputChannel::Throttle, 1300);
        rig.step(&mut control, 0);

        rig.pulses.set(InputChannel::Steering, 0);
        rig.pulses.set(InputChannel::Throttle, 2100);
        let it = rig.step(&mut control, 10);
        assert_eq!(it.steering_us, None);
        assert_eq!(it.throttle_us, None);
        // Previous pulses hold
        assert_eq!(rig.outputs.steering(), Some(1300));
        assert_eq!(rig.outputs.throttle(), Some(1429));
    }

    #[test]
    fn test_manual_discards_serial_input() {
        let mut rig = Rig::new();
        let mut control = ControlLoop::default();
        rig.pulses.set(InputChannel::Mode, 1400);
        rig.link.inject(b"100,40");

        rig.step(&mut control, 0);
        assert_eq!(rig.link.pending(), 0);

        // The stale half-line must not complete once autonomous
        rig.pulses.set(InputChannel::Mode, 1600);
        rig.link.inject(b"\n");
        let it = rig.step(&mut control, 10);
        assert_eq!(it.command, CommandOutcome::Rejected);
        assert_eq!(rig.outputs.steering(), Some(1500));
    }

    #[test]
    fn test_override_forces_leds_and_skips_trigger_read() {
        let mut rig = Rig::new();
        let mut control = ControlLoop::default();
        rig.pulses.set(InputChannel::LedOverride, 1900);
        rig.pulses.set(InputChannel::BlinkTrigger, 2000);

        let it = rig.step(&mut control, 0);
        assert!(it.leds.zone_high && it.leds.zone_low);
        assert!(rig.leds.is_on(StatusLed::ZoneHigh));
        assert!(rig.leds.is_on(StatusLed::ZoneLow));
        assert!(!rig.pulses.reads().contains(&InputChannel::BlinkTrigger));
    }

    #[test]
    fn test_mode_change_flag() {
        let mut rig = Rig::new();
        let mut control = ControlLoop::default();
        rig.pulses.set(InputChannel::Mode, 1400);
        assert!(!rig.step(&mut control, 0).mode_changed);
        assert!(!rig.step(&mut control, 10).mode_changed);

        rig.pulses.set(InputChannel::Mode, 1600);
        assert!(rig.step(&mut control, 20).mode_changed);
        assert_eq!(control.stats().mode_changes, 1);
    }

    #[test]
    fn test_write_failures_are_counted_not_fatal() {
        let mut rig = Rig::new();
        let mut control = ControlLoop::default();
        rig.pulses.set(InputChannel::Mode, 1600);
        rig.outputs.set_failing(true);

        let it = rig.step(&mut control, 0);
        assert_eq!(it.write_failures, 2);
        assert_eq!(it.last_error, Some("PWM error"));
        assert_eq!(rig.status.count(), 1);
        assert_eq!(control.stats().write_failures, 2);
    }
}
