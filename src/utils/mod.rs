//! Utility functions module
//! 
//! Wall-clock access and signal handling used by the binary and the controller.

pub mod clock;
pub mod signals;

// Re-export main items
pub use clock::{Clock, ManualClock, SystemClock};
pub use signals::shutdown_signal;
