//! Bikepoint - an in-memory bike-share station inventory API
//!
//! Serves filtered, sorted, paginated station queries and aggregate summaries,
//! with a background task that simulates live occupancy changes.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod service;
pub mod store;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use service::StationService;
pub use tasks::spawn_refresh_task;
