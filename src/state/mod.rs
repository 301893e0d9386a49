//! State management module
//! 
//! This module contains the timer snapshot exposed to renderers and the
//! session that derives it from elapsed wall-clock time.

pub mod session;
pub mod timer_state;

// Re-export main types
pub use session::{Tick, TimerSession, COUNTDOWN_SECONDS};
pub use timer_state::{TimerState, COMPLETION_MESSAGE};
