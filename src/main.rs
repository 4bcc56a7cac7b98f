//! kona - a read-only HTTP API server for historical weather observations
//!
//! This is the main entry point for the kona application.

use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use kona::handlers::app_router;
use kona::logging::{init_tracing, log_dataset_stats};
use kona::{dataset, AppState, Config, KonaError, Result};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration before installing the subscriber; clap reports
    // argument errors on stderr by itself
    let (config, dataset_path) = Config::load()?;

    // Validate configuration
    config.validate()?;

    init_tracing(&config.log_level);

    info!("Starting kona v{}", env!("CARGO_PKG_VERSION"));
    info!("Opening dataset file: {:?}", dataset_path);

    // Open the dataset read-only and fail fast on a schema mismatch
    let pool = dataset::connect(&dataset_path).await.map_err(|e| {
        error!("Failed to open dataset: {}", e);
        e
    })?;

    dataset::validate_schema(&pool).await.map_err(|e| {
        error!("Dataset schema mismatch: {}", e);
        e
    })?;

    let summary = dataset::summarize(&pool).await.map_err(|e| {
        error!("Failed to summarize dataset: {}", e);
        e
    })?;

    log_dataset_stats(&dataset_path.to_string_lossy(), &summary);

    // Wrap in Arc for sharing and build the router
    let state = AppState::new_shared(config.clone(), pool, summary);
    let app = app_router(state);

    // Create the server address
    let addr = SocketAddr::from((
        config
            .server
            .host
            .parse::<std::net::IpAddr>()
            .map_err(|e| KonaError::Config {
                message: format!("Invalid host address: {}", e),
            })?,
        config.server.port,
    ));

    info!("Server listening on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| KonaError::Server {
            message: format!("Failed to bind to address: {}", e),
        })?;

    // Set up graceful shutdown
    let shutdown_future = shutdown_signal();

    info!("Server is ready to accept connections");

    // Start the server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_future)
        .await
        .map_err(|e| KonaError::Server {
            message: format!("Server error: {}", e),
        })?;

    info!("Server has been gracefully shut down");
    Ok(())
}

/// Wait for a shutdown signal
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
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
