//! Mention-all bot entry point
//!
//! Run with:
//! ```bash
//! cargo run -p mention-api
//! ```
//!
//! Configuration is loaded from environment variables or a `.env` file.

use mention_common::{try_init_tracing_with_config, BotConfig, TracingConfig};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    // Load configuration before tracing so APP_ENV can pick the log profile
    let config = match BotConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = try_init_tracing_with_config(TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    if let Err(e) = run(config).await {
        error!(error = %e, "Server failed");
        std::process::exit(1);
    }
}

async fn run(config: BotConfig) -> Result<(), Box<dyn std::error::Error>> {
    info!(
        app = %config.app.name,
        env = ?config.app.env,
        address = %config.server.address(),
        offset_unit = %config.mentions.offset_unit,
        blacklisted = config.mentions.blacklist.len(),
        "Configuration loaded"
    );

    let missing = config.platform.missing();
    if !missing.is_empty() {
        warn!(missing = ?missing, "Platform configuration incomplete; @all will fail until it is set");
    }

    mention_api::run(config).await?;

    Ok(())
}
