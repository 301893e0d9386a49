//! Background tasks module
//! 
//! This module contains the periodic recompute task behind the countdown.

pub mod countdown;

// Re-export main types
pub use countdown::{CountdownController, TICK_INTERVAL};
