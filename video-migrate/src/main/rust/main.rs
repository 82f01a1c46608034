use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use video_migrate::{run, Config};

#[tokio::main]
async fn main() -> ExitCode {
    // Usage errors exit with status 2
    let config = Config::parse();

    // Initialize logging
    let filter = if config.verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();

    match run(&config).await {
        Ok(outcome) => {
            if outcome.is_no_change() {
                info!("No migrations to run");
            }
            info!(
                direction = %config.direction,
                steps = config.steps,
                applied = ?outcome.applied,
                reverted = ?outcome.reverted,
                "migrations done"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "migration failed");
            ExitCode::from(e.exit_code())
        }
    }
}
