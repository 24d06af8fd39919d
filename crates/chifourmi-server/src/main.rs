//! Entry point for the Chifourmi match server.
//!
//! Loads `chifourmi-config.yaml` (optional) plus environment overrides,
//! initializes logging, and serves HTTP and `WebSocket` traffic until
//! `Ctrl-C`.

use std::path::Path;
use std::sync::Arc;

use chifourmi_core::config::{ChifourmiConfig, LoggingConfig};
use chifourmi_server::{AppState, ServerConfig, start_server};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Default location of the configuration file, relative to the working
/// directory.
const CONFIG_PATH: &str = "chifourmi-config.yaml";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the listener
/// cannot bind, or the server fails while serving.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ChifourmiConfig::load_or_default(Path::new(CONFIG_PATH))?;
    init_tracing(&config.logging);

    let server_config = ServerConfig::from(&config);
    info!(
        host = server_config.host,
        port = server_config.port,
        cors_origins = ?server_config.cors_origins,
        "chifourmi-server starting"
    );

    let state = Arc::new(AppState::new());
    start_server(&server_config, state).await?;

    info!("chifourmi-server shut down cleanly");
    Ok(())
}

/// Install the global subscriber. `RUST_LOG` wins over the configured
/// level.
fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    if logging.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    }
}
