//! Core traits for platform-agnostic mixer functionality.
//!
//! Trait definitions here are pure and have no feature gates. Mock
//! implementations are always available for host testing; the Embassy
//! implementation lives in the firmware crate.

pub mod time;

pub use time::{MockTime, TimeSource};
