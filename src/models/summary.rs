//! Aggregate summary over the full station store

use chrono::{DateTime, FixedOffset, Utc};
use serde::Serialize;

/// Aggregate snapshot over the whole (unfiltered) station store.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BikeSummary {
    pub total_stations: usize,
    pub total_bike_stands: i64,
    pub total_available_bikes: i64,
    pub total_available_stands: i64,
    pub open_stations: usize,
    pub closed_stations: usize,
    /// Mean of bikes/stands over stations with stands > 0, 0 when none.
    pub average_occupancy: f64,
    /// Most recent station update, unset when no station carries a timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_update_utc: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_update_local: Option<DateTime<FixedOffset>>,
}
