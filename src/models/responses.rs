//! Response DTOs for the station inventory API
//!
//! Defines the structure of outgoing HTTP response bodies. Stations go out
//! with their derived UTC and Dublin-local timestamps attached.

use chrono::{DateTime, FixedOffset, Utc};
use serde::Serialize;

use super::station::{GeoPosition, Station};
use super::time::{epoch_to_utc, localize};

/// A station as rendered to clients.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StationResponse {
    pub number: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub status: String,
    pub bike_stands: i64,
    pub available_bikes: i64,
    pub available_stands: i64,
    pub position: GeoPosition,
    #[serde(rename = "last_update")]
    pub last_update: i64,
    pub last_update_utc: DateTime<Utc>,
    pub last_update_local: DateTime<FixedOffset>,
}

impl From<&Station> for StationResponse {
    fn from(station: &Station) -> Self {
        let utc = epoch_to_utc(station.last_update);
        Self {
            number: station.number,
            name: station.name.clone(),
            address: station.address.clone(),
            status: station.status.clone(),
            bike_stands: station.bike_stands,
            available_bikes: station.available_bikes,
            available_stands: station.available_stands,
            position: station.position,
            last_update: station.last_update,
            last_update_utc: utc,
            last_update_local: localize(utc),
        }
    }
}

/// Response body for the station list endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedStationsResponse {
    pub page: u64,
    pub page_size: u64,
    /// Count after filtering, before pagination.
    pub total_count: usize,
    pub items: Vec<StationResponse>,
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_station() -> Station {
        Station {
            number: 1,
            name: "CLARENDON ROW".to_string(),
            address: Some("Clarendon Row".to_string()),
            status: "OPEN".to_string(),
            bike_stands: 24,
            available_bikes: 10,
            available_stands: 14,
            position: GeoPosition {
                lat: 53.340927,
                lng: -6.262501,
            },
            last_update: 1700018764000,
        }
    }

    #[test]
    fn test_station_response_carries_derived_timestamps() {
        let response = StationResponse::from(&sample_station());
        assert_eq!(response.last_update_utc.timestamp_millis(), 1700018764000);
        assert_eq!(
            response.last_update_local.timestamp_millis(),
            1700018764000
        );
    }

    #[test]
    fn test_station_response_serializes_camel_case() {
        let json = serde_json::to_string(&StationResponse::from(&sample_station())).unwrap();
        assert!(json.contains("bikeStands"));
        assert!(json.contains("availableBikes"));
        assert!(json.contains("last_update"));
        assert!(json.contains("lastUpdateLocal"));
    }

    #[test]
    fn test_paged_response_serializes() {
        let response = PagedStationsResponse {
            page: 1,
            page_size: 10,
            total_count: 1,
            items: vec![StationResponse::from(&sample_station())],
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("totalCount"));
        assert!(json.contains("pageSize"));
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("Something went wrong");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("error"));
        assert!(json.contains("Something went wrong"));
    }
}
