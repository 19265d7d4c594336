//! Pokedex server.
//!
//! Serves types, pokemon and moves from a JSON document as plain text.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌──────────────────────────────────────────────┐
//!                      │                POKEDEX SERVER                │
//!   data.json ─────────┼─▶ data::loader ─▶ data::index ─▶ Arc<Pokedex>│
//!                      │                                      │       │
//!   Client Request     │  ┌─────────┐    ┌──────────┐    ┌────▼─────┐ │
//!   ───────────────────┼─▶│  http   │───▶│ handlers │───▶│  query   │ │
//!                      │  │ server  │    └────┬─────┘    └──────────┘ │
//!                      │  └─────────┘         │                       │
//!   Client Response    │                 ┌────▼─────┐                 │
//!   ◀──────────────────┼─────────────────│  render  │                 │
//!                      │                 └──────────┘                 │
//!                      │  config · lifecycle · observability          │
//!                      └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use pokedex_server::config::{load_config, ServerConfig};
use pokedex_server::config::validation::validate_config;
use pokedex_server::lifecycle::{self, signals, DataStatus, Shutdown};
use pokedex_server::observability::{logging, metrics};
use pokedex_server::HttpServer;

#[derive(Parser)]
#[command(name = "pokedex-server")]
#[command(about = "Serve pokemon reference data over HTTP", long_about = None)]
struct Cli {
    /// TOML configuration file; defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override `data.path`.
    #[arg(short, long)]
    data: Option<String>,

    /// Override `listener.bind_address`.
    #[arg(short, long)]
    bind: Option<String>,
}

fn resolve_config(cli: &Cli) -> Result<ServerConfig, Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServerConfig::default(),
    };

    if let Some(data) = &cli.data {
        config.data.path = data.clone();
    }
    if let Some(bind) = &cli.bind {
        config.listener.bind_address = bind.clone();
    }

    validate_config(&config).map_err(pokedex_server::config::ConfigError::Validation)?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    logging::init_logging(&config.observability);

    tracing::info!("pokedex-server v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        data_path = %config.data.path,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    let startup = lifecycle::initialize(&config.data)?;
    if let DataStatus::ServingEmpty(e) = &startup.data_status {
        tracing::warn!(error = %e, "Starting with empty reference data");
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, startup.pokedex);
    let server_task = tokio::spawn(server.run(listener, shutdown.subscribe()));

    signals::wait_for_shutdown_signal().await;
    shutdown.trigger();
    server_task.await??;

    tracing::info!("Shutdown complete");
    Ok(())
}
