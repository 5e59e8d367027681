//! rc_mixer_core - Pure no_std control logic for the RC mixer / speed governor
//!
//! This crate contains the platform-agnostic decision logic that turns RC
//! receiver pulses and serial commands into steering and throttle pulses.
//! Everything here can be tested on host without any feature flags or
//! embassy dependencies.
//!
//! # Design Principles
//!
//! - **Zero cfg**: No `#[cfg(feature = ...)]` directives allowed
//! - **Pure no_std**: No std library dependencies
//! - **Capability traits**: Pulse measurement, actuator output, LEDs, the
//!   serial link and the status echo are injected via traits
//!
//! # Modules
//!
//! - [`config`]: Fixed mixer limits and thresholds (`MixerConfig`)
//! - [`traits`]: Time abstraction (`TimeSource`, `MockTime`)
//! - [`rc`]: Pulse measurement capability and `PulseReader`
//! - [`blink`]: Per-LED periodic blink state machine
//! - [`limiter`]: Speed limiting and pulse remapping
//! - [`mode`]: Manual / autonomous arbitration
//! - [`command`]: Serial command parsing and line assembly
//! - [`servo`]: Actuator output capability
//! - [`status`]: Status LEDs and status echo lines
//! - [`control`]: The control loop orchestrating one iteration

#![no_std]

pub mod blink;
pub mod command;
pub mod config;
pub mod control;
pub mod limiter;
pub mod mode;
pub mod rc;
pub mod servo;
pub mod status;
pub mod traits;

pub use config::MixerConfig;
pub use control::{ControlLoop, Iteration, LoopStats, MixerIo};
pub use mode::DriveMode;
