#![cfg_attr(not(test), no_std)]

//! rc_mixer_firmware - Embassy firmware for the RC mixer / speed governor
//!
//! This crate binds the pure control logic in `rc_mixer_core` to hardware:
//! receiver pulse capture, servo/ESC PWM, status LEDs and the serial link.
//!
//! # Design Principles
//!
//! - **Platform traits**: Peripherals are reached through `platform::traits`
//!   so adapters and the mixer can be tested against the mock platform
//! - **Feature-gated hardware**: RP2350 code builds only with `pico2_w`
//! - **Logging macros**: `log_info!` and friends route to defmt on target and
//!   to stdout under host tests

// Platform abstraction layer
pub mod platform;

// Logging and firmware infrastructure
pub mod core;

// Receiver, servo, LED and serial adapters over the platform traits
pub mod libraries;

// Vehicle wiring of the control loop
pub mod rover;

// Note: Logging macros (log_info!, log_warn!, log_error!, log_debug!, log_trace!)
// are exported at crate root via #[macro_export] in core::logging
