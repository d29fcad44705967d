//! Domain and API models for the station inventory
//!
//! Defines the station record, the aggregate summary, and the DTOs used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;
pub mod station;
pub mod summary;
pub mod time;

// Re-export commonly used types
pub use requests::StationListQuery;
pub use responses::{ErrorResponse, HealthResponse, PagedStationsResponse, StationResponse};
pub use station::{GeoPosition, Station};
pub use summary::BikeSummary;
