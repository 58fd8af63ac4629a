//! Collection Gateway binary.
//!
//! Startup order: config first so the log level is known (loader errors
//! surface on stderr), then logging, then metrics, then the listener.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use collection_gateway::config::{load_config, GatewayConfig};
use collection_gateway::observability::{logging, metrics};
use collection_gateway::GatewayServer;

#[derive(Parser, Debug)]
#[command(name = "collection-gateway", version, about = "Friendly-URL dispatch gateway")]
struct Args {
    /// Path to the TOML configuration file. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => GatewayConfig::default(),
    };

    logging::init_logging(&config.observability.log_level);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        renewal_window_minutes = config.session.renewal_window_minutes,
        supported_families = config.support_matrix.minimums.len(),
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let server = GatewayServer::new(config);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
