//! Timer state structure exposed to renderers

use std::fmt;
use serde::{Deserialize, Serialize};

use super::session::COUNTDOWN_SECONDS;

/// Message shown once the countdown has run out
pub const COMPLETION_MESSAGE: &str = "Okay. That's it.";

/// Snapshot of a timer session after a recompute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    pub remaining_seconds: u32,
    pub is_complete: bool,
}

impl TimerState {
    /// State of a freshly started session
    pub fn initial() -> Self {
        Self::running(COUNTDOWN_SECONDS)
    }

    /// Create a running state with remaining seconds
    pub fn running(remaining_seconds: u32) -> Self {
        Self {
            remaining_seconds,
            is_complete: false,
        }
    }

    /// Create the terminal state
    pub fn complete() -> Self {
        Self {
            remaining_seconds: 0,
            is_complete: true,
        }
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::initial()
    }
}

/// Renders the value a viewer sees: the seconds left, or the final message
impl fmt::Display for TimerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_complete {
            f.write_str(COMPLETION_MESSAGE)
        } else {
            write!(f, "{}", self.remaining_seconds)
        }
    }
}
