//! API Routes
//!
//! Configures the Axum router with all station inventory endpoints.

use axum::{
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    create_station, get_station, get_summary, health_handler, list_stations, update_station,
    AppState,
};

/// Creates the main router with all endpoints configured.
///
/// The static `/summary` route is registered alongside the `:number` capture;
/// axum matches the static segment first.
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route(
            "/api/v1/stations",
            get(list_stations).post(create_station),
        )
        .route("/api/v1/stations/summary", get(get_summary))
        .route(
            "/api/v1/stations/:number",
            get(get_station).put(update_station),
        )
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
