//! Night roster API server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p roster-api
//! ```
//!
//! Configuration is loaded from environment variables or a `.env` file.

use anyhow::Context;
use roster_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    // Load configuration first so the log format can follow APP_ENV
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = try_init_tracing_with_config(&TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    if let Err(e) = run(config).await {
        error!("Server failed: {e:#}");
        std::process::exit(1);
    }
}

async fn run(config: AppConfig) -> anyhow::Result<()> {
    info!(name = %config.app.name, "Starting night roster API server...");

    info!(
        env = ?config.app.env,
        port = config.api.port,
        admin_token_configured = config.admin_token.is_configured(),
        "Configuration loaded"
    );
    if !config.admin_token.is_configured() {
        warn!("ADMIN_TOKEN is not set; admin endpoints will reject every request");
    }

    roster_api::run(config)
        .await
        .context("API server stopped")
}
