//! Mixer vehicle
//!
//! Owns the control loop together with every peripheral it touches and runs
//! one iteration per call. Logging happens here so the core stays silent:
//!
//! - the initial mode once, and every manual ↔ autonomous transition once
//! - rejected command lines at debug level
//! - failed actuator or LED writes at warn level
//!
//! ## Safety
//!
//! The loop never stops on errors. A failed write is logged and the next
//! iteration writes again.

use crate::libraries::{ReceiverInputs, SerialLink, ServoOutputs, StatusLeds};
use crate::platform::traits::{GpioInterface, PulseInInterface, PwmInterface, UartInterface};
use rc_mixer_core::control::CommandOutcome;
use rc_mixer_core::traits::TimeSource;
use rc_mixer_core::{ControlLoop, Iteration, LoopStats, MixerConfig, MixerIo};

/// Peripherals used by the mixer
pub struct MixerHardware<P, S, T, G, U>
where
    P: PulseInInterface,
    S: PwmInterface,
    T: PwmInterface,
    G: GpioInterface,
    U: UartInterface,
{
    /// Receiver channel inputs
    pub inputs: ReceiverInputs<P>,
    /// Steering servo and throttle ESC
    pub outputs: ServoOutputs<S, T>,
    /// Mode and zone LEDs
    pub leds: StatusLeds<G>,
    /// Command input and status echo
    pub link: SerialLink<U>,
}

/// RC mixer vehicle
pub struct MixerVehicle<P, S, T, G, U>
where
    P: PulseInInterface,
    S: PwmInterface,
    T: PwmInterface,
    G: GpioInterface,
    U: UartInterface,
{
    control: ControlLoop,
    hardware: MixerHardware<P, S, T, G, U>,
}

impl<P, S, T, G, U> MixerVehicle<P, S, T, G, U>
where
    P: PulseInInterface,
    S: PwmInterface,
    T: PwmInterface,
    G: GpioInterface,
    U: UartInterface,
{
    /// Create a vehicle from its configuration and peripherals
    pub fn new(config: MixerConfig, hardware: MixerHardware<P, S, T, G, U>) -> Self {
        Self {
            control: ControlLoop::new(config),
            hardware,
        }
    }

    /// Loop counters
    pub fn stats(&self) -> &LoopStats {
        self.control.stats()
    }

    /// Configuration in use
    pub fn config(&self) -> &MixerConfig {
        self.control.config()
    }

    /// Peripherals
    pub fn hardware(&self) -> &MixerHardware<P, S, T, G, U> {
        &self.hardware
    }

    /// Mutable peripherals
    pub fn hardware_mut(&mut self) -> &mut MixerHardware<P, S, T, G, U> {
        &mut self.hardware
    }

    /// Run one control loop iteration at the current time of `time`
    pub fn run_iteration<C: TimeSource>(&mut self, time: &C) -> Iteration {
        let hw = &mut self.hardware;
        let (mut rx, mut tx) = (&hw.link, &hw.link);
        let mut io = MixerIo {
            pulses: &mut hw.inputs,
            outputs: &mut hw.outputs,
            leds: &mut hw.leds,
            link: &mut rx,
            status: &mut tx,
        };
        let iteration = self.control.tick(&mut io, time);

        if self.control.stats().iterations == 1 {
            crate::log_info!("Initial mode: {}", iteration.mode.name());
        } else if iteration.mode_changed {
            crate::log_info!("Mode changed to {}", iteration.mode.name());
        }
        if iteration.command == CommandOutcome::Rejected {
            crate::log_debug!("Ignoring malformed command line, holding neutral");
        }
        if let Some(error) = iteration.last_error {
            crate::log_warn!(
                "{} output write(s) failed: {}",
                iteration.write_failures,
                error
            );
        }

        iteration
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::{MockGpio, MockPulseIn, MockPwm, MockUart};
    use crate::platform::traits::{PwmConfig, UartConfig};
    use rc_mixer_core::rc::InputChannel;
    use rc_mixer_core::servo::duty_cycle_to_pulse;
    use rc_mixer_core::status::StatusLed;
    use rc_mixer_core::traits::MockTime;
    use rc_mixer_core::DriveMode;

    type TestVehicle = MixerVehicle<MockPulseIn, MockPwm, MockPwm, MockGpio, MockUart>;

    fn vehicle(mode_us: u32) -> TestVehicle {
        let hardware = MixerHardware {
            inputs: ReceiverInputs::new([
                MockPulseIn::with_width(1500),
                MockPulseIn::with_width(1500),
                MockPulseIn::with_width(mode_us),
                MockPulseIn::with_width(1500),
                MockPulseIn::with_width(1000),
            ]),
            outputs: ServoOutputs::new(
                MockPwm::new(PwmConfig::default()),
                MockPwm::new(PwmConfig::default()),
            )
            .unwrap(),
            leds: StatusLeds::new([
                MockGpio::new_output(),
                MockGpio::new_output(),
                MockGpio::new_output(),
            ])
            .unwrap(),
            link: SerialLink::new(MockUart::new(UartConfig::default())),
        };
        MixerVehicle::new(MixerConfig::default(), hardware)
    }

    fn steering_us(v: &TestVehicle) -> u16 {
        duty_cycle_to_pulse(v.hardware().outputs.steering().duty_cycle())
    }

    fn throttle_us(v: &TestVehicle) -> u16 {
        duty_cycle_to_pulse(v.hardware().outputs.throttle().duty_cycle())
    }

    #[test]
    fn test_autonomous_command_reaches_pwm() {
        let mut v = vehicle(1900);
        v.hardware_mut()
            .link
            .uart_mut()
            .inject_rx_data(b"50,-30\n");

        let time = MockTime::with_initial_ms(1000);
        let it = v.run_iteration(&time);

        assert_eq!(it.mode, DriveMode::Autonomous);
        assert!(matches!(it.command, CommandOutcome::Accepted(_)));
        assert_eq!(steering_us(&v), 1750);
        assert_eq!(throttle_us(&v), 1328);
        assert!(v.hardware().leds.is_on(StatusLed::Mode));
        assert_eq!(
            v.hardware().link.uart().tx_buffer(),
            "AUTO → steer: 1750  throttle: 1328\r\n".as_bytes()
        );
    }

    #[test]
    fn test_autonomous_without_command_holds_neutral() {
        let mut v = vehicle(1900);
        let time = MockTime::with_initial_ms(1000);
        let it = v.run_iteration(&time);

        assert_eq!(it.command, CommandOutcome::NoLine);
        assert_eq!(steering_us(&v), 1500);
        assert_eq!(throttle_us(&v), 1500);
    }

    #[test]
    fn test_manual_passes_receiver_through() {
        let mut v = vehicle(1000);
        v.hardware_mut()
            .inputs
            .pin_mut(InputChannel::Steering)
            .set_width(Some(1700));
        v.hardware_mut()
            .inputs
            .pin_mut(InputChannel::Throttle)
            .set_width(Some(1800));
        v.hardware_mut().link.uart_mut().inject_rx_data(b"99,99\n");

        let time = MockTime::with_initial_ms(1000);
        let it = v.run_iteration(&time);

        assert_eq!(it.mode, DriveMode::Manual);
        assert_eq!(steering_us(&v), 1700);
        assert_eq!(throttle_us(&v), 1544);
        assert!(!v.hardware().leds.is_on(StatusLed::Mode));
        assert_eq!(v.hardware().link.uart().rx_pending(), 0);
        assert_eq!(
            v.hardware().link.uart().tx_buffer(),
            "MANUAL → steerIn: 1700  throttleRaw: 1800\r\n".as_bytes()
        );
    }

    #[test]
    fn test_mode_change_counted() {
        let mut v = vehicle(1000);
        let time = MockTime::with_initial_ms(1000);
        v.run_iteration(&time);

        v.hardware_mut()
            .inputs
            .pin_mut(InputChannel::Mode)
            .set_width(Some(1900));
        time.advance_ms(20);
        let it = v.run_iteration(&time);

        assert!(it.mode_changed);
        assert_eq!(v.stats().mode_changes, 1);
        assert_eq!(v.stats().iterations, 2);
    }

    #[test]
    fn test_failed_led_write_does_not_stop_loop() {
        let mut v = vehicle(1900);
        v.hardware_mut()
            .leds
            .pin_mut(StatusLed::ZoneLow)
            .set_faulted(true);
        v.hardware_mut().link.uart_mut().inject_rx_data(b"0,100\n");

        let time = MockTime::with_initial_ms(1000);
        let it = v.run_iteration(&time);

        assert_eq!(it.write_failures, 1);
        assert_eq!(it.last_error, Some("GPIO error"));
        assert_eq!(throttle_us(&v), 1620);
        assert!(v.hardware().leds.is_on(StatusLed::Mode));
        assert_eq!(v.stats().write_failures, 1);
    }
}
