use std::convert::Infallible;
use std::time::Duration;

use clap::Parser;

pub const DEFAULT_HTTP_PORT: u16 = 8080;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "video-service",
    version = "0.1.0",
    about = "REST API for registering and retrieving videos"
)]
pub struct Config {
    /// HTTP listener port; malformed values fall back to 8080
    #[arg(
        long,
        env = "HTTP_PORT",
        default_value_t = DEFAULT_HTTP_PORT,
        value_parser = parse_port_or_default
    )]
    pub http_port: u16,

    /// Seconds in-flight requests get to finish after a shutdown signal
    #[arg(long, env = "SHUTDOWN_TIMEOUT_SECS", default_value = "10")]
    pub shutdown_timeout_secs: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout_secs)
    }
}

/// Parse a port, never failing: anything unparsable means the default port
pub fn parse_port_or_default(raw: &str) -> Result<u16, Infallible> {
    Ok(raw.trim().parse().unwrap_or(DEFAULT_HTTP_PORT))
}
