use anyhow::Context;
use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::app_config::AppConfig;
use setup::{dependency_injection::DependencyContainer, server::Server};

/// Legends & Luminaries entry point
///
/// Loads configuration, wires dependencies and serves the session API.
/// Exits with an error when `GROQ_API_KEY` is missing.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env()
        .inspect_err(|err| tracing::error!(error = %err, "Invalid configuration"))
        .context("failed to load configuration")?;

    // 4. Wire dependencies
    let container = DependencyContainer::new(config.groq.clone())?;

    // 5. Run server
    Server::run(config, container).await?;

    Ok(())
}
