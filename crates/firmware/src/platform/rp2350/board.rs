//! Pico 2 W board wiring
//!
//! | Function                  | GPIO | Peripheral      |
//! |---------------------------|------|-----------------|
//! | Serial TX / RX            | 0/1  | UART0, 115200   |
//! | Steering in (CH1)         | 2    | input           |
//! | Throttle in (CH2)         | 3    | input           |
//! | Mode switch in (SwA/CH8)  | 4    | input           |
//! | Blink trigger (SwC/CH5)   | 5    | input           |
//! | LED override (SwD/CH7)    | 6    | input           |
//! | Mode LED                  | 13   | output          |
//! | High-zone LED             | 14   | output          |
//! | Low-zone LED              | 15   | output          |
//! | Steering servo            | 16   | PWM slice 0 A   |
//! | Throttle ESC              | 18   | PWM slice 1 A   |

use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::peripherals::UART0;
use embassy_rp::pwm::Pwm;
use embassy_rp::uart::{self, Async, Uart, UartRx};
use embassy_rp::{bind_interrupts, Peripherals};

use super::{Rp2350Led, Rp2350PulseIn, Rp2350Pwm, Rp2350Uart, UART_RX_QUEUE};
use crate::libraries::{ReceiverInputs, SerialLink, ServoOutputs, StatusLeds};
use crate::platform::traits::{PwmConfig, UartConfig};
use crate::platform::Result;
use crate::rover::{MixerHardware, MixerVehicle};
use rc_mixer_core::MixerConfig;

bind_interrupts!(pub struct Irqs {
    UART0_IRQ => uart::InterruptHandler<UART0>;
});

/// GPIO assignment, kept in step with the wiring in [`init_board`]
#[derive(Debug, Clone, Copy)]
pub struct BoardPins {
    pub uart_tx: u8,
    pub uart_rx: u8,
    pub steering_in: u8,
    pub throttle_in: u8,
    pub mode_in: u8,
    pub blink_in: u8,
    pub override_in: u8,
    pub mode_led: u8,
    pub zone_high_led: u8,
    pub zone_low_led: u8,
    pub steering_out: u8,
    pub throttle_out: u8,
}

/// Pico 2 W pin table
pub const PINS: BoardPins = BoardPins {
    uart_tx: 0,
    uart_rx: 1,
    steering_in: 2,
    throttle_in: 3,
    mode_in: 4,
    blink_in: 5,
    override_in: 6,
    mode_led: 13,
    zone_high_led: 14,
    zone_low_led: 15,
    steering_out: 16,
    throttle_out: 18,
};

/// The mixer as wired on this board
pub type BoardVehicle = MixerVehicle<
    Rp2350PulseIn<'static>,
    Rp2350Pwm<'static>,
    Rp2350Pwm<'static>,
    Rp2350Led<'static>,
    Rp2350Uart<'static>,
>;

/// Bring up every peripheral the mixer uses
///
/// Returns the vehicle and the UART receive half, which belongs to
/// `tasks::serial::uart_rx_task`.
///
/// # Errors
///
/// Returns the platform error if an output cannot be parked at its initial
/// state.
pub fn init_board(
    p: Peripherals,
    config: MixerConfig,
) -> Result<(BoardVehicle, UartRx<'static, UART0, Async>)> {
    let uart_config = UartConfig::default();
    let mut hw_uart_config = uart::Config::default();
    hw_uart_config.baudrate = uart_config.baud_rate;
    let serial = Uart::new(
        p.UART0,
        p.PIN_0,
        p.PIN_1,
        Irqs,
        p.DMA_CH0,
        p.DMA_CH1,
        hw_uart_config,
    );
    let (tx, rx) = serial.split();

    let inputs = ReceiverInputs::new([
        Rp2350PulseIn::new(Input::new(p.PIN_2, Pull::None)),
        Rp2350PulseIn::new(Input::new(p.PIN_3, Pull::None)),
        Rp2350PulseIn::new(Input::new(p.PIN_4, Pull::None)),
        Rp2350PulseIn::new(Input::new(p.PIN_5, Pull::None)),
        Rp2350PulseIn::new(Input::new(p.PIN_6, Pull::None)),
    ]);

    let leds = StatusLeds::new([
        Rp2350Led::new(Output::new(p.PIN_13, Level::Low)),
        Rp2350Led::new(Output::new(p.PIN_14, Level::Low)),
        Rp2350Led::new(Output::new(p.PIN_15, Level::Low)),
    ])?;

    let steering = Pwm::new_output_a(p.PWM_SLICE0, p.PIN_16, super::pwm::servo_slice_config());
    let throttle = Pwm::new_output_a(p.PWM_SLICE1, p.PIN_18, super::pwm::servo_slice_config());
    let outputs = ServoOutputs::new(
        Rp2350Pwm::new(steering, PwmConfig::default()),
        Rp2350Pwm::new(throttle, PwmConfig::default()),
    )?;

    let hardware = MixerHardware {
        inputs,
        outputs,
        leds,
        link: SerialLink::new(Rp2350Uart::new(tx, &UART_RX_QUEUE)),
    };

    crate::log_info!(
        "Board up: receiver GPIO{}-{}, servo GPIO{}, ESC GPIO{}, UART0 {} baud",
        PINS.steering_in,
        PINS.override_in,
        PINS.steering_out,
        PINS.throttle_out,
        uart_config.baud_rate
    );

    Ok((MixerVehicle::new(config, hardware), rx))
}
