//! Configuration and CLI argument handling

use clap::Parser;

use crate::render::OutputFormat;

/// CLI argument parsing structure
#[derive(Debug, Parser)]
#[command(name = "countdown-timer")]
#[command(about = "A sixty second countdown that ends in intentional nothingness")]
#[command(version = "1.0.0")]
pub struct Config {
    /// How the countdown is written to stdout
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Skip the title and description above the countdown
    #[arg(long)]
    pub no_header: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }

    /// Filter directive for the tracing subscriber
    pub fn log_filter(&self) -> String {
        format!("countdown_timer={}", self.log_level())
    }
}
