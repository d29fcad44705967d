//! Station record
//!
//! The authoritative station shape, matching the upstream data file layout.

use serde::{Deserialize, Serialize};

/// Latitude/longitude pair owned by a station.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoPosition {
    pub lat: f64,
    pub lng: f64,
}

/// A bike-share station record.
///
/// `available_stands` is derived (`bike_stands - available_bikes`) and is
/// re-computed by every mutator rather than trusted from input.
/// `last_update` is epoch milliseconds, stamped to "now" on every mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    /// Unique, stable station identity. 0 means "assign one on create".
    #[serde(default)]
    pub number: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    /// OPEN / CLOSED, compared case-insensitively.
    #[serde(default)]
    pub status: String,
    /// Total capacity.
    #[serde(default, alias = "bike_stands")]
    pub bike_stands: i64,
    #[serde(default, alias = "available_bikes")]
    pub available_bikes: i64,
    #[serde(default, alias = "available_stands")]
    pub available_stands: i64,
    #[serde(default)]
    pub position: GeoPosition,
    /// Epoch milliseconds, as `last_update` in the data file.
    #[serde(default, rename = "last_update", alias = "lastUpdate")]
    pub last_update: i64,
}

impl Station {
    /// Whether the station status is OPEN (case-insensitive).
    pub fn is_open(&self) -> bool {
        self.status.eq_ignore_ascii_case("OPEN")
    }

    /// Ratio of available bikes to total stands, 0 when there are no stands.
    pub fn occupancy(&self) -> f64 {
        if self.bike_stands <= 0 {
            0.0
        } else {
            self.available_bikes as f64 / self.bike_stands as f64
        }
    }
}
