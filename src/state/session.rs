//! Timer session: remaining time derived from a wall-clock start instant
//!
//! Remaining seconds are recomputed from absolute elapsed time on every tick
//! instead of being decremented, so late or skipped ticks never cause drift.

use tracing::trace;

use super::TimerState;

/// Length of every countdown, in seconds
pub const COUNTDOWN_SECONDS: u32 = 60;

/// Outcome of recomputing a session against the clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Still counting down
    Running(TimerState),
    /// Zero was observed for the first time; returned exactly once
    Completed(TimerState),
    /// The session was already terminal; nothing changed
    Finished,
}

/// One run of the countdown from start to completion
#[derive(Debug, Clone)]
pub struct TimerSession {
    start_millis: i64,
    remaining_seconds: u32,
    is_complete: bool,
}

impl TimerSession {
    /// Start a session at the given wall-clock reading
    pub fn new(start_millis: i64) -> Self {
        Self {
            start_millis,
            remaining_seconds: COUNTDOWN_SECONDS,
            is_complete: false,
        }
    }

    /// Wall-clock reading captured at start
    pub fn start_millis(&self) -> i64 {
        self.start_millis
    }

    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    /// Current state without touching the clock
    pub fn snapshot(&self) -> TimerState {
        TimerState {
            remaining_seconds: self.remaining_seconds,
            is_complete: self.is_complete,
        }
    }

    /// Whole seconds left after `elapsed_millis`, floored and clamped to `[0, 60]`.
    /// Negative elapsed (start in the future) counts as zero elapsed.
    pub fn remaining_at(elapsed_millis: i64) -> u32 {
        let elapsed_secs = elapsed_millis.max(0) / 1000;
        i64::from(COUNTDOWN_SECONDS).saturating_sub(elapsed_secs).max(0) as u32
    }

    /// Recompute remaining time for the reading `now_millis`
    pub fn recompute(&mut self, now_millis: i64) -> Tick {
        if self.is_complete {
            return Tick::Finished;
        }

        let elapsed = now_millis.saturating_sub(self.start_millis);
        // A clock stepping backwards must not raise the displayed value.
        let remaining = Self::remaining_at(elapsed).min(self.remaining_seconds);
        if remaining != self.remaining_seconds {
            trace!("Remaining seconds {} -> {}", self.remaining_seconds, remaining);
        }
        self.remaining_seconds = remaining;

        if remaining == 0 {
            self.is_complete = true;
            Tick::Completed(self.snapshot())
        } else {
            Tick::Running(self.snapshot())
        }
    }
}
