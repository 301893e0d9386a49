//! Countdown Timer - sixty seconds, then nothing
//! 
//! This is the main entry point for the countdown-timer application.

use std::io;
use anyhow::Context;
use tracing::info;

use countdown_timer::{
    config::Config,
    render::{render_session, Renderer},
    tasks::CountdownController,
    utils::{shutdown_signal, SystemClock},
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr so they never break the in-place countdown on stdout
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(config.log_filter())
        .init();

    info!("Starting countdown-timer v1.0.0");
    info!("Configuration: format={:?}, header={}", config.format, !config.no_header);

    let mut controller = CountdownController::start(SystemClock);
    let mut renderer = Renderer::new(io::stdout(), config.format, !config.no_header);

    tokio::select! {
        result = render_session(controller.subscribe(), &mut renderer) => {
            let last = result.context("Failed to render countdown")?;
            info!("Countdown finished: {:?}", last);
        }
        result = shutdown_signal() => {
            result.context("Failed to install signal handler")?;
            info!("Shutdown signal received, stopping countdown");
        }
    }

    controller.stop();
    renderer.finish().context("Failed to finish output")?;

    info!("Countdown shutdown complete");
    Ok(())
}
