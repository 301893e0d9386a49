//! Countdown Timer - sixty seconds, then nothing
//! 
//! This library provides a countdown controller that derives the remaining
//! whole seconds from a wall-clock start instant, publishes every recompute
//! to renderers, and settles exactly once into a terminal state.

pub mod config;
pub mod render;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use render::{render_session, OutputFormat, Renderer};
pub use state::{TimerSession, TimerState, COMPLETION_MESSAGE, COUNTDOWN_SECONDS};
pub use tasks::CountdownController;
pub use utils::{shutdown_signal, Clock, ManualClock, SystemClock};
