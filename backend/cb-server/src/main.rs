use cb_server::{AppState, build_router, logger, metrics};
use cb_stream::{ChannelLimits, ChannelRegistry, HistoryBuffer};

use std::error::Error;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Pick up CB_* overrides from .env when present
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = cb_config::Config::load()?;
    config.validate()?;

    let log_file_path = config.log_file_path()?;
    if let Some(parent) = log_file_path.as_ref().and_then(|path| path.parent()) {
        std::fs::create_dir_all(parent)?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting cb-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool
    let pool = cb_db::connect(&config.database_path()?).await?;
    cb_db::run_migrations(&pool).await?;

    let registry = ChannelRegistry::new(ChannelLimits::new(config.server.max_connections));
    let history = HistoryBuffer::new(config.history.capacity);

    let mut app_state = AppState::new(registry.clone(), history, pool);
    if config.server.metrics_enabled {
        app_state = app_state.with_metrics(metrics::install_recorder()?);
        info!("Prometheus metrics enabled at /metrics");
    }
    let shutdown = app_state.shutdown.clone();

    let app = build_router(app_state);

    // Create TCP listener
    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Server listening on {}", listener.local_addr()?);

    // Spawn signal handler for graceful shutdown
    let shutdown_for_signal = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
                shutdown_for_signal.shutdown();
            }
            Err(e) => {
                error!("Failed to listen for SIGINT: {}", e);
            }
        }
    });

    // Open streams never end on their own; close them when shutdown starts
    let mut guard = shutdown.subscribe_guard();
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            guard.wait().await;
            registry.close_all().await;
        })
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}
