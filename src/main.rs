mod burrow;
mod cluster;
mod collector;
mod config;
mod error;
mod export;
mod http;
mod metrics;

use crate::burrow::BurrowClient;
use crate::collector::BurrowCollector;
use crate::config::{Config, Overrides};
use crate::http::server::HttpServer;
use clap::Parser;
use std::sync::Arc;
use tokio::signal;
use tokio::sync::broadcast;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "burrow-exporter")]
#[command(about = "Prometheus exporter for Kafka consumer lag as reported by Burrow")]
#[command(version)]
struct Args {
    /// Path to configuration file (defaults apply when omitted)
    #[arg(short, long)]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Burrow API address
    #[arg(long, env = "BURROW_ADDR")]
    burrow_address: Option<String>,

    /// Burrow API version
    #[arg(long, env = "BURROW_API_VERSION")]
    burrow_api_version: Option<u32>,

    /// Port for the metrics endpoint
    #[arg(long)]
    http_port: Option<u16>,

    /// Comma separated list of metrics to disable (one of: consumer-status,
    /// partition-current-offset, partition-lag, partition-max-offset,
    /// partition-status, topic-partition-offset, total-lag)
    #[arg(long)]
    disabled_metrics: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    init_logging(&args.log_level);

    info!("Starting burrow-exporter");

    // Load configuration
    let config = Config::load(args.config.as_deref())?.with_overrides(Overrides {
        burrow_address: args.burrow_address,
        burrow_api_version: args.burrow_api_version,
        http_port: args.http_port,
        disabled_metrics: args.disabled_metrics,
    })?;
    let filter = config.exporter.metric_filter()?;
    info!(
        burrow = %config.burrow.address,
        api_version = config.burrow.api_version,
        disabled_metrics = ?filter.disabled().collect::<Vec<_>>(),
        max_concurrent_clusters = config.exporter.max_concurrent_clusters,
        "Configuration loaded"
    );

    let client = BurrowClient::new(&config.burrow)?;
    info!(base_url = %client.base_url(), "Created Burrow client");
    let collector = Arc::new(BurrowCollector::new(
        Arc::new(client.clone()),
        filter,
        config.exporter.max_concurrent_clusters,
    ));

    // Create shutdown channel
    let (shutdown_tx, _) = broadcast::channel::<()>(1);

    let http_server = HttpServer::new(
        config.exporter.listen_addr()?,
        &config.exporter.telemetry_path,
        collector,
        client,
    );

    let shutdown_rx = shutdown_tx.subscribe();
    let mut server_handle = tokio::spawn(http_server.run(shutdown_rx));

    // The server is the only task, so it ending early ends the process
    tokio::select! {
        () = shutdown_signal() => {
            info!("Shutdown signal received, stopping...");
            let _ = shutdown_tx.send(());
            server_handle.await??;
        }
        result = &mut server_handle => {
            if let Err(e) = result? {
                error!(error = %e, "HTTP server error");
                return Err(e.into());
            }
        }
    }

    info!("burrow-exporter stopped");
    Ok(())
}

fn init_logging(level: &str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
