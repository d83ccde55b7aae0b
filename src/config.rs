//! Configuration and CLI argument handling

use clap::Parser;

/// CLI argument parsing structure
#[derive(Parser)]
#[command(name = "dotboard")]
#[command(about = "A state-managed service that mirrors IoT telemetry widgets over HTTP")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Port to bind the status server to
    #[arg(short, long, default_value = "8750")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// API token sent as the `token` query parameter on every poll
    #[arg(short, long)]
    pub token: String,

    /// Variable id polled by the device-activity timer widget
    #[arg(long)]
    pub timer_variable: String,

    /// Variable id polled by the patient-position widget (widget disabled when omitted)
    #[arg(long)]
    pub position_variable: Option<String>,

    /// Base URL of the telemetry API
    #[arg(long, default_value = "https://industrial.api.ubidots.com/api/v1.6")]
    pub api_base: String,

    /// Poll cadence of the timer widget in milliseconds
    #[arg(long, default_value = "1500")]
    pub poll_interval_ms: u64,

    /// Poll cadence of the position widget in milliseconds
    #[arg(long, default_value = "2000")]
    pub position_poll_interval_ms: u64,

    /// Staleness threshold in milliseconds; samples older than this mark the device inactive
    #[arg(long, default_value = "3000")]
    pub stale_threshold_ms: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}
