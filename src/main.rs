//! Local development HTTP relay binary.
//!
//! Binds a loopback listener, mounts the relay under its path prefix, and
//! forwards requests to whatever origin the caller names in the target
//! header, streaming responses back as they arrive.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use api_relay::config::{load_config, RelayConfig};
use api_relay::http::HttpServer;
use api_relay::lifecycle::{signals, Shutdown};
use api_relay::observability;

#[derive(Debug, Parser)]
#[command(name = "api-relay", version, about)]
struct Cli {
    /// Path to a TOML config file. Built-in defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address (e.g. "127.0.0.1:8787").
    #[arg(long)]
    listen: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => RelayConfig::default(),
    };
    if let Some(listen) = cli.listen {
        config.listener.bind_address = listen;
    }

    observability::logging::init(&config.observability.log_level);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        mount_prefix = %config.relay.mount_prefix,
        target_header = %config.relay.target_header,
        "configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    let shutdown = Shutdown::new();
    signals::spawn_signal_handler(&shutdown);

    let server = HttpServer::new(config)?;
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("shutdown complete");
    Ok(())
}
