//! Command-based control for scheduled timers.

use crate::scheduler::TimerId;

/// Actions for controlling a registered timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerAction {
    /// Pause the timer.
    Pause,
    /// Resume the timer.
    Resume,
    /// Restart the timer from zero.
    Restart,
}

/// Command targeting a specific timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimerCommand {
    pub timer_id: TimerId,
    pub action: TimerAction,
}

impl TimerCommand {
    /// Creates command.
    pub fn new(timer_id: TimerId, action: TimerAction) -> Self {
        Self { timer_id, action }
    }
}
