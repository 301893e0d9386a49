//! Countdown controller and its periodic recompute task

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};
use tokio::{
    sync::watch,
    task::JoinHandle,
    time::{self, Instant, MissedTickBehavior},
};
use tracing::{debug, info, warn};

use crate::{
    state::{Tick, TimerSession, TimerState},
    utils::Clock,
};

/// Nominal recompute cadence (~60Hz)
pub const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Sender side of the state channel; `None` once the session has ended
type Publisher = Arc<Mutex<Option<watch::Sender<TimerState>>>>;

/// Owns one timer session and the task that recomputes it.
///
/// Dropping the controller stops the task.
#[derive(Debug)]
pub struct CountdownController {
    publisher: Publisher,
    state_rx: watch::Receiver<TimerState>,
    task: Option<JoinHandle<()>>,
}

impl CountdownController {
    /// Capture the clock's current reading and start ticking.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start<C: Clock>(clock: C) -> Self {
        let session = TimerSession::new(clock.now_millis());
        info!("Starting countdown session at {}ms", session.start_millis());

        let (state_tx, state_rx) = watch::channel(session.snapshot());
        let publisher: Publisher = Arc::new(Mutex::new(Some(state_tx)));
        let task = tokio::spawn(countdown_task(clock, session, Arc::clone(&publisher)));

        Self {
            publisher,
            state_rx,
            task: Some(task),
        }
    }

    /// Receiver that observes every published snapshot
    pub fn subscribe(&self) -> watch::Receiver<TimerState> {
        self.state_rx.clone()
    }

    /// Most recently published snapshot
    pub fn snapshot(&self) -> TimerState {
        *self.state_rx.borrow()
    }

    /// Whether the recompute task is still alive
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Halt the recompute task. Safe to call any number of times.
    ///
    /// Once this returns no further snapshot is published.
    pub fn stop(&mut self) {
        match self.publisher.lock() {
            Ok(mut sender) => {
                sender.take();
            }
            Err(e) => warn!("Countdown publisher lock poisoned: {}", e),
        }

        if let Some(task) = self.task.take() {
            if !task.is_finished() {
                debug!("Stopping countdown task");
            }
            task.abort();
        }
    }

    /// Resolve with the terminal snapshot, or `None` if stopped before completion
    pub async fn wait_complete(&self) -> Option<TimerState> {
        let mut state_rx = self.subscribe();
        let result = state_rx.wait_for(|state| state.is_complete).await;
        result.ok().map(|state| *state)
    }
}

impl Drop for CountdownController {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Recompute the session every tick until it completes or the controller stops
async fn countdown_task<C: Clock>(clock: C, mut session: TimerSession, publisher: Publisher) {
    // First recompute happens one interval after start, not immediately.
    let mut interval = time::interval_at(Instant::now() + TICK_INTERVAL, TICK_INTERVAL);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        interval.tick().await;

        let tick = session.recompute(clock.now_millis());
        if !publish(&publisher, tick) {
            break;
        }
    }
}

/// Expose a recompute result; returns `false` when the task must end
fn publish(publisher: &Publisher, tick: Tick) -> bool {
    let Ok(mut sender) = publisher.lock() else {
        warn!("Countdown publisher lock poisoned, ending task");
        return false;
    };
    let Some(state_tx) = sender.as_ref() else {
        debug!("Countdown stopped, ending task");
        return false;
    };

    match tick {
        Tick::Running(state) => {
            state_tx.send_replace(state);
            true
        }
        Tick::Completed(state) => {
            state_tx.send_replace(state);
            sender.take();
            info!("Countdown complete");
            false
        }
        Tick::Finished => false,
    }
}
