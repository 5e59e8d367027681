//! RP2350 Platform Embassy Tasks
//!
//! These tasks use the `#[embassy_executor::task]` attribute and are only
//! available with the `pico2_w` feature.
//!
//! ## Available Tasks
//!
//! - `control_loop_task` - runs the mixer loop forever
//! - `uart_rx_task` - moves received serial bytes into the receive queue

pub mod control;
pub mod serial;

pub use control::control_loop_task;
pub use serial::uart_rx_task;
