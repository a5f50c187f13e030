//! Goal bot entry point
//!
//! Run with:
//! ```bash
//! cargo run -p goal-dialog
//! ```
//!
//! Configuration is loaded from environment variables.

use goal_common::{try_init_tracing, AppConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Initialize tracing
    if let Err(e) = try_init_tracing() {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    // Run the bot
    if let Err(e) = run().await {
        error!(error = %e, "Bot failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting goal bot...");

    // Load configuration
    let config = AppConfig::from_env().map_err(|e| {
        error!(error = %e, "Failed to load configuration");
        e
    })?;

    info!(
        env = ?config.app.env,
        app = %config.app.name,
        "Configuration loaded"
    );

    // Run the conversation loop
    goal_dialog::run(config).await?;

    Ok(())
}
