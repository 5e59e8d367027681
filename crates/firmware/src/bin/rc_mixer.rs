//! RC mixer firmware for Raspberry Pi Pico 2 W
//!
//! Reads the receiver, arbitrates manual and autonomous driving, limits
//! speed, and drives the steering servo, the ESC and the status LEDs. See
//! `platform::rp2350::board` for the wiring.
//!
//! # Usage
//!
//! ```bash
//! cargo build -p rc_mixer_firmware --release --features pico2_w \
//!     --target thumbv8m.main-none-eabihf --bin rc_mixer
//! ```

#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_rp::block::ImageDef;
use rc_mixer_core::MixerConfig;
use rc_mixer_firmware::platform::rp2350::init_board;
use rc_mixer_firmware::platform::rp2350::tasks::{control_loop_task, uart_rx_task};
use rc_mixer_firmware::{log_error, log_info};
use {defmt_rtt as _, panic_probe as _};

#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = ImageDef::secure_exe();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    log_info!("RC mixer starting");

    let (vehicle, rx) = match init_board(p, MixerConfig::default()) {
        Ok(parts) => parts,
        Err(e) => {
            log_error!("Board initialization failed: {}", e.as_str());
            return;
        }
    };

    if spawner.spawn(uart_rx_task(rx)).is_err() {
        log_error!("Failed to spawn serial receive task");
    }
    if spawner.spawn(control_loop_task(vehicle)).is_err() {
        log_error!("Failed to spawn control loop task");
    }
}
