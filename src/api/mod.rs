//! API Module
//!
//! HTTP handlers and routing for the station inventory REST API.
//!
//! # Endpoints
//! - `GET /api/v1/stations` - Filter, search, sort, and paginate stations
//! - `GET /api/v1/stations/summary` - Aggregate summary
//! - `GET /api/v1/stations/:number` - Fetch a station by number
//! - `POST /api/v1/stations` - Create a station
//! - `PUT /api/v1/stations/:number` - Update a station
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
