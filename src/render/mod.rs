//! Rendering module
//! 
//! Draws timer snapshots to a terminal or as newline-delimited JSON.

pub mod renderer;

// Re-export main items
pub use renderer::{render_session, OutputFormat, Renderer, PAGE_DESCRIPTION, PAGE_TITLE};
