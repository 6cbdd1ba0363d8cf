//! Configuration and CLI argument handling

use std::path::PathBuf;

use clap::Parser;

/// CLI argument parsing structure
#[derive(Parser)]
#[command(name = "intermission")]
#[command(about = "A state-managed kiosk controller for screenings with a scheduled intermission")]
#[command(version)]
pub struct Config {
    /// Port to bind the control API to
    #[arg(short, long, default_value = "4700")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Playback position in seconds at which the intermission begins
    #[arg(short, long, default_value = "1833")]
    pub threshold: u64,

    /// Intermission length in seconds
    #[arg(short, long, default_value = "600")]
    pub duration: u64,

    /// Path to the feature media file
    #[arg(short, long, default_value = "feature.mp4")]
    pub media: PathBuf,

    /// Total running time of the media in seconds
    #[arg(long, default_value = "5400")]
    pub media_duration: u64,

    /// Kiosk hardening: lock fullscreen and suppress exit keys
    #[arg(short, long)]
    pub kiosk: bool,

    /// Allow the manual intermission toggle (testing)
    #[arg(long)]
    pub manual_toggle: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the control API address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}
