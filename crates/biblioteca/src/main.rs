//! Biblioteca - book catalogue HTTP service backed by SQLite

use anyhow::{Context, Result};
use clap::Parser;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod config;

use biblioteca_api::{AppState, BASE_PATH, create_router};
use biblioteca_db::Database;
use config::{Config, LogFormat};

/// Biblioteca - CRUD API for the book catalogue
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml")]
    config: String,

    /// Bind address
    #[arg(long, env = "BIBLIOTECA_BIND")]
    bind: Option<String>,

    /// Port
    #[arg(short, long, env = "BIBLIOTECA_PORT")]
    port: Option<u16>,

    /// SQLite database file
    #[arg(long, env = "BIBLIOTECA_DATABASE")]
    database: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration
    let (mut config, found) = Config::load(&args.config)?;
    if let Some(path) = args.database {
        config.database.path = path;
    }

    // Initialize logging
    init_logging(&config.logging.level, config.logging.format);

    info!("Starting Biblioteca v{}", env!("CARGO_PKG_VERSION"));
    Config::log_source(&args.config, found);

    // Initialize database; the service is useless without it
    let db = match Database::new(&config.database.url()).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to initialize database {}: {}", config.database.path, e);
            std::process::exit(1);
        }
    };

    // Install the Prometheus recorder if enabled
    let metrics_handle = if config.metrics.enabled {
        let handle = PrometheusBuilder::new()
            .install_recorder()
            .context("Failed to install Prometheus recorder")?;
        Some(Arc::new(handle))
    } else {
        None
    };

    // Create router
    let app = create_router(AppState::new(db.clone()), metrics_handle).layer(TraceLayer::new_for_http());

    // Determine bind address
    let bind_addr = args.bind.unwrap_or(config.server.bind_address);
    let port = args.port.unwrap_or(config.server.port);
    let addr: SocketAddr = format!("{}:{}", bind_addr, port)
        .parse()
        .with_context(|| format!("Invalid bind address {}:{}", bind_addr, port))?;

    // Start server
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Listening on {}", addr);
    info!("Book endpoints at http://{}{}", addr, BASE_PATH);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await;
    info!("Server stopped");
    Ok(())
}

/// Initialize logging; `RUST_LOG` overrides the configured level
fn init_logging(level: &str, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Json => registry.with(fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(fmt::layer()).init(),
    }
}

/// Wait for Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    info!("Shutdown signal received");
}
