//! Server Entry Point
//!
//! Loads configuration, initializes logging, builds the resource stores and
//! serves them over HTTP until Ctrl-C.

use anyhow::Result;
use tracing::info;

use crud_labs_server::core::{Config, HttpTransport, LabServer, init_logging};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment
    let config = Config::from_env();

    // Keep the guard alive so the log file is flushed on exit
    let _log_guard = init_logging(&config.logging)?;

    info!("Starting {} v{}", config.server.name, config.server.version);

    info!("Demo data seeding: {}", config.store.seed_demo_data);

    let server = LabServer::new(config.clone());
    if config.store.seed_demo_data {
        server.seed_demo_data().await;
    }

    info!("Server initialized");

    HttpTransport::new(config.http.clone()).run(server).await?;

    info!("Server shutting down");

    Ok(())
}
