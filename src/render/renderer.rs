//! Snapshot renderer and the loop that feeds it

use std::io::{self, Write};
use clap::ValueEnum;
use tokio::sync::watch;
use tracing::debug;

use crate::state::TimerState;

pub const PAGE_TITLE: &str = "Countdown Timer";
pub const PAGE_DESCRIPTION: &str = "A countdown timer that ends in intentional nothingness";

/// How snapshots are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Seconds redrawn in place, then the final message
    #[default]
    Text,
    /// One JSON object per distinct snapshot
    Json,
}

/// Writes snapshots to `out`, skipping ones equal to the last drawn
pub struct Renderer<W: Write> {
    out: W,
    format: OutputFormat,
    show_header: bool,
    header_drawn: bool,
    last: Option<TimerState>,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W, format: OutputFormat, show_header: bool) -> Self {
        Self {
            out,
            format,
            show_header,
            header_drawn: false,
            last: None,
        }
    }

    /// Last snapshot actually written
    pub fn last_drawn(&self) -> Option<TimerState> {
        self.last
    }

    pub fn draw(&mut self, state: TimerState) -> io::Result<()> {
        if self.last == Some(state) {
            return Ok(());
        }

        match self.format {
            OutputFormat::Text => self.draw_text(state)?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, &state)?;
                writeln!(self.out)?;
            }
        }
        self.out.flush()?;
        self.last = Some(state);
        Ok(())
    }

    fn draw_text(&mut self, state: TimerState) -> io::Result<()> {
        if self.show_header && !self.header_drawn {
            writeln!(self.out, "{}", PAGE_TITLE)?;
            writeln!(self.out, "{}", PAGE_DESCRIPTION)?;
            writeln!(self.out)?;
            self.header_drawn = true;
        }

        if state.is_complete {
            writeln!(self.out, "\r{}", state)
        } else {
            // Pad so "9" fully overwrites "10".
            write!(self.out, "\r{:<2}", state.to_string())
        }
    }

    /// Terminate an in-place line left open by an interrupted countdown
    pub fn finish(&mut self) -> io::Result<()> {
        let open_line = self.format == OutputFormat::Text
            && self.last.is_some_and(|state| !state.is_complete);
        if open_line {
            writeln!(self.out)?;
            self.out.flush()?;
        }
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Draw every snapshot from `state_rx` until the terminal state is drawn or
/// the controller goes away. Returns the last snapshot seen.
pub async fn render_session<W: Write>(
    mut state_rx: watch::Receiver<TimerState>,
    renderer: &mut Renderer<W>,
) -> io::Result<TimerState> {
    loop {
        let state = *state_rx.borrow_and_update();
        renderer.draw(state)?;
        if state.is_complete {
            return Ok(state);
        }

        if state_rx.changed().await.is_err() {
            let state = *state_rx.borrow();
            renderer.draw(state)?;
            debug!("Countdown publisher closed at {:?}", state);
            return Ok(state);
        }
    }
}
