//! End-to-end countdown behaviour driven by virtual time and a manual clock

use std::time::Duration;
use tokio::time::sleep;

use countdown_timer::{
    render_session, CountdownController, ManualClock, OutputFormat, Renderer, TimerState,
    COMPLETION_MESSAGE,
};

const START: i64 = 1_700_000_000_000;

/// Let a few 16ms ticks run
async fn settle() {
    sleep(Duration::from_millis(50)).await;
}

#[tokio::test(start_paused = true)]
async fn starts_at_sixty() {
    let clock = ManualClock::new(START);
    let controller = CountdownController::start(clock.clone());
    settle().await;

    assert_eq!(controller.snapshot(), TimerState::running(60));
    assert!(controller.is_running());
}

#[tokio::test(start_paused = true)]
async fn one_millisecond_before_expiry_shows_one() {
    let clock = ManualClock::new(START);
    let controller = CountdownController::start(clock.clone());

    clock.set(START + 59_999);
    settle().await;

    assert_eq!(controller.snapshot(), TimerState::running(1));
    assert!(controller.is_running());
}

#[tokio::test(start_paused = true)]
async fn completes_at_sixty_seconds_and_stops_ticking() {
    let clock = ManualClock::new(START);
    let controller = CountdownController::start(clock.clone());

    clock.set(START + 60_000);
    let last = controller.wait_complete().await;
    assert_eq!(last, Some(TimerState::complete()));
    assert_eq!(controller.snapshot().to_string(), COMPLETION_MESSAGE);

    settle().await;
    assert!(!controller.is_running());

    // Further clock movement has no effect on a finished session
    clock.set(START);
    settle().await;
    assert_eq!(controller.snapshot(), TimerState::complete());
}

#[tokio::test(start_paused = true)]
async fn stopping_midway_freezes_state() {
    let clock = ManualClock::new(START);
    let mut controller = CountdownController::start(clock.clone());

    clock.set(START + 30_000);
    settle().await;
    assert_eq!(controller.snapshot(), TimerState::running(30));

    controller.stop();
    clock.set(START + 60_000);
    sleep(Duration::from_secs(2)).await;

    assert_eq!(controller.snapshot(), TimerState::running(30));
    assert!(!controller.is_running());
    assert_eq!(controller.wait_complete().await, None);
}

#[tokio::test(start_paused = true)]
async fn remaining_is_non_increasing_across_clock_jumps() {
    let clock = ManualClock::new(START);
    let controller = CountdownController::start(clock.clone());
    let mut state_rx = controller.subscribe();

    let driver = {
        let clock = clock.clone();
        tokio::spawn(async move {
            for reading in [5_000, 2_000, 17_400, 17_000, 45_000, 44_999, 59_000, 120_000, 0] {
                clock.set(START + reading);
                sleep(Duration::from_millis(40)).await;
            }
        })
    };

    let mut last = state_rx.borrow_and_update().remaining_seconds;
    let mut completions = 0;
    while state_rx.changed().await.is_ok() {
        let state = *state_rx.borrow_and_update();
        assert!(state.remaining_seconds <= last, "{} rose above {}", state.remaining_seconds, last);
        last = state.remaining_seconds;
        if state.is_complete {
            completions += 1;
        }
    }

    driver.await.unwrap();
    assert_eq!(completions, 1);
    assert_eq!(controller.snapshot(), TimerState::complete());
}

#[tokio::test(start_paused = true)]
async fn renders_full_countdown_as_json_lines() {
    let clock = ManualClock::new(START);
    let controller = CountdownController::start(clock.clone());

    let driver = {
        let clock = clock.clone();
        tokio::spawn(async move {
            for _ in 0..60 {
                sleep(Duration::from_millis(50)).await;
                clock.advance(1_000);
            }
        })
    };

    let mut renderer = Renderer::new(Vec::new(), OutputFormat::Json, true);
    let last = render_session(controller.subscribe(), &mut renderer).await.unwrap();
    driver.await.unwrap();

    assert_eq!(last, TimerState::complete());

    let output = String::from_utf8(renderer.into_inner()).unwrap();
    let states: Vec<TimerState> = output
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(states.len(), 61);
    assert_eq!(states.first(), Some(&TimerState::running(60)));
    assert_eq!(states.last(), Some(&TimerState::complete()));
    assert!(states.windows(2).all(|pair| pair[1].remaining_seconds < pair[0].remaining_seconds));
}

#[tokio::test(start_paused = true)]
async fn renders_text_ending_in_message() {
    let clock = ManualClock::new(START);
    let controller = CountdownController::start(clock.clone());

    clock.set(START + 58_500);
    let driver = {
        let clock = clock.clone();
        tokio::spawn(async move {
            sleep(Duration::from_millis(100)).await;
            clock.set(START + 61_000);
        })
    };

    let mut renderer = Renderer::new(Vec::new(), OutputFormat::Text, false);
    render_session(controller.subscribe(), &mut renderer).await.unwrap();
    renderer.finish().unwrap();
    driver.await.unwrap();

    let output = String::from_utf8(renderer.into_inner()).unwrap();
    assert_eq!(output, "\r60\r2 \rOkay. That's it.\n");
}

#[tokio::test(start_paused = true)]
async fn dropping_controller_closes_the_channel() {
    let clock = ManualClock::new(START);
    let controller = CountdownController::start(clock.clone());
    let mut state_rx = controller.subscribe();

    drop(controller);
    clock.set(START + 10_000);

    assert!(state_rx.changed().await.is_err());
    assert_eq!(*state_rx.borrow(), TimerState::running(60));
}
