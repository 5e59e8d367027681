//! Hardware adapters between the platform traits and the mixer core
//!
//! - [`rc_channel`]: receiver pulse capture as a core `PulseSource`
//! - [`srv_channel`]: steering servo and ESC as a core `PulseOutput`
//! - [`status_led`]: mode and zone LEDs as a core `StatusIndicator`
//! - [`serial_link`]: the serial port as command input and status echo

pub mod rc_channel;
pub mod serial_link;
pub mod srv_channel;
pub mod status_led;

pub use rc_channel::ReceiverInputs;
pub use serial_link::SerialLink;
pub use srv_channel::ServoOutputs;
pub use status_led::StatusLeds;
