//! Vehicle wiring
//!
//! Binds the hardware adapters to one `ControlLoop` and logs what the loop
//! decides.

pub mod mixer;

pub use mixer::{MixerHardware, MixerVehicle};
