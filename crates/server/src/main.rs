//! Roster
//!
//! Generates a synthetic employee roster at startup and serves read-only
//! queries over it.

use anyhow::Context;
use clap::Parser;
use roster_rest::{ServerConfig, create_app_with_config, init_logging};
use roster_store::{EmployeeSource, InMemoryStore, save_snapshot};
use tracing::info;

/// Builds the employee store from a snapshot or the generator, writing the
/// snapshot file when configured to.
fn create_store(config: &ServerConfig) -> anyhow::Result<InMemoryStore> {
    let store = match config.snapshot_in.as_deref() {
        Some(path) => {
            info!(snapshot = %path, "Loading employees from snapshot");
            InMemoryStore::from_snapshot(path)
                .with_context(|| format!("Failed to load snapshot {}", path))?
        }
        None => InMemoryStore::generate(&config.generator_config())
            .context("Failed to generate employees")?,
    };

    if config.writes_snapshot() {
        save_snapshot(store.employees(), &config.snapshot_path)
            .with_context(|| format!("Failed to write snapshot {}", config.snapshot_path))?;
    }

    Ok(store)
}

/// Starts the Axum HTTP server.
async fn serve(app: axum::Router, config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    info!(address = %addr, "Server listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    info!(
        port = config.port,
        host = %config.host,
        employee_count = config.employee_count,
        seed = ?config.seed,
        strict_filters = config.strict_filters,
        "Starting Roster"
    );

    let store = create_store(&config)?;
    let app = create_app_with_config(store, config.clone());
    serve(app, &config).await
}
