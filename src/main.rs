//! Bikepoint - an in-memory bike-share station inventory API
//!
//! Serves filtered, sorted, paginated station queries and aggregate summaries,
//! with a background task that simulates live occupancy changes.

mod api;
mod cache;
mod config;
mod error;
mod models;
mod query;
mod service;
mod store;
mod tasks;

use std::net::SocketAddr;
use std::time::Duration;

use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::{create_router, AppState};
use cache::QueryCache;
use config::Config;
use service::StationService;
use store::{load_stations, StationStore};
use tasks::spawn_refresh_task;

/// Main entry point for the station inventory server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Load the initial station list from the data file
/// 4. Create the store, cache, and service
/// 5. Start the background occupancy refresh task
/// 6. Create Axum router with all endpoints
/// 7. Start HTTP server on configured port
/// 8. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bikepoint=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Bikepoint station inventory server");

    // Load configuration from environment variables
    let config = Config::from_env();
    info!(
        "Configuration loaded: data_file={}, cache_ttl={}s, refresh={}-{}s, port={}",
        config.data_file,
        config.cache_ttl,
        config.refresh_min_secs,
        config.refresh_max_secs,
        config.server_port
    );

    // One-time load of the initial station list; a missing or malformed
    // file starts an empty inventory rather than failing startup.
    let stations = load_stations(&config.data_file);
    info!("Loaded {} stations from {}", stations.len(), config.data_file);

    // Create the shared service: store + query cache
    let store = StationStore::new(stations);
    let cache = QueryCache::new(Duration::from_secs(config.cache_ttl));
    let service = StationService::new(store, cache);

    // Start the background occupancy refresh task
    let refresh_handle = spawn_refresh_task(
        service.clone(),
        config.refresh_min_secs,
        config.refresh_max_secs,
    );
    info!("Background occupancy refresh task started");

    // Create router with all endpoints
    let app = create_router(AppState::new(service));

    // Bind to configured port
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    info!("Server listening on http://{}", addr);

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(refresh_handle))
        .await
        .unwrap();

    info!("Server shutdown complete");
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the refresh task and allows graceful shutdown.
async fn shutdown_signal(refresh_handle: tokio::task::JoinHandle<()>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    // Abort the refresh task; its sleep is the only preemption point
    refresh_handle.abort();
    warn!("Occupancy refresh task aborted");
}
