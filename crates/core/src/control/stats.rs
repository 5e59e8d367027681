//! Control loop statistics
//!
//! Counters are updated once per iteration and can be queried for
//! monitoring. They never influence actuation.

use super::{CommandOutcome, Iteration};
use crate::mode::DriveMode;

/// Running counters for the control loop
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopStats {
    /// Total iterations executed
    pub iterations: u64,

    /// Iterations that took the autonomous path
    pub autonomous_iterations: u64,

    /// Iterations that took the manual path
    pub manual_iterations: u64,

    /// Command lines parsed successfully
    pub commands_accepted: u32,

    /// Command lines rejected by the parser
    pub commands_rejected: u32,

    /// Channel reads that returned no pulse
    pub signal_timeouts: u64,

    /// Actuator or LED writes that failed
    pub write_failures: u32,

    /// Manual ↔ autonomous transitions
    pub mode_changes: u32,
}

impl LoopStats {
    /// Fold one iteration into the counters
    pub fn record(&mut self, iteration: &Iteration) {
        self.iterations = self.iterations.saturating_add(1);
        match iteration.mode {
            DriveMode::Autonomous => {
                self.autonomous_iterations = self.autonomous_iterations.saturating_add(1)
            }
            DriveMode::Manual => self.manual_iterations = self.manual_iterations.saturating_add(1),
        }
        match iteration.command {
            CommandOutcome::Accepted(_) => {
                self.commands_accepted = self.commands_accepted.saturating_add(1)
            }
            CommandOutcome::Rejected => {
                self.commands_rejected = self.commands_rejected.saturating_add(1)
            }
            CommandOutcome::NoLine => {}
        }
        self.signal_timeouts = self
            .signal_timeouts
            .saturating_add(u64::from(iteration.signal_timeouts));
        self.write_failures = self
            .write_failures
            .saturating_add(u32::from(iteration.write_failures));
        if iteration.mode_changed {
            self.mode_changes = self.mode_changes.saturating_add(1);
        }
    }

    /// Fraction of received lines that parsed (1.0 when none were received)
    pub fn command_acceptance(&self) -> f32 {
        let total = self.commands_accepted.saturating_add(self.commands_rejected);
        if total == 0 {
            1.0
        } else {
            self.commands_accepted as f32 / total as f32
        }
    }
}
