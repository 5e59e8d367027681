//! Firmware infrastructure
//!
//! Logging lives here; the control logic itself is re-exported from
//! `rc_mixer_core` so firmware code can reach it as `crate::core::X`.

pub mod logging;

pub use rc_mixer_core::blink;
pub use rc_mixer_core::command;
pub use rc_mixer_core::config;
pub use rc_mixer_core::control;
pub use rc_mixer_core::limiter;
pub use rc_mixer_core::mode;
pub use rc_mixer_core::rc;
pub use rc_mixer_core::servo;
pub use rc_mixer_core::status;
pub use rc_mixer_core::traits;
