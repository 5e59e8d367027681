//! RP2350 platform implementation
//!
//! Embassy-RP backed implementations of the platform traits for the
//! Raspberry Pi Pico 2 W, plus the board wiring and Embassy tasks.
//!
//! Only built with the `pico2_w` feature.

pub mod board;
pub mod gpio;
pub mod pulse_in;
pub mod pwm;
pub mod tasks;
pub mod uart;

pub use board::{init_board, BoardPins, BoardVehicle, Irqs, PINS};
pub use gpio::Rp2350Led;
pub use pulse_in::Rp2350PulseIn;
pub use pwm::Rp2350Pwm;
pub use uart::{Rp2350Uart, UART_RX_QUEUE};
