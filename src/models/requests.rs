//! Request DTOs for the station inventory API
//!
//! Defines the query-string parameters accepted by the station list endpoint.
//! Create/update bodies reuse the [`Station`](super::Station) shape directly.

use serde::Deserialize;

/// Query-string parameters for `GET /api/v1/stations`.
///
/// Every filter is optional; blank or non-positive values degrade to
/// "no filter". Page and page size are normalized to at least 1, with
/// page size defaulting to 10. None of these ever produce an error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationListQuery {
    /// Case-insensitive substring match against name or address.
    #[serde(default)]
    pub q: Option<String>,
    /// Case-insensitive exact status match (OPEN / CLOSED).
    #[serde(default)]
    pub status: Option<String>,
    /// Keep stations with at least this many available bikes (when > 0).
    #[serde(default)]
    pub min_bikes: Option<i64>,
    /// Sort key: name, bikes, occupancy; anything else orders by number.
    #[serde(default)]
    pub sort: Option<String>,
    /// "desc" (case-insensitive) for descending, anything else ascending.
    #[serde(default)]
    pub dir: Option<String>,
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_page_size")]
    pub page_size: i64,
}

fn default_page() -> i64 {
    1
}

fn default_page_size() -> i64 {
    10
}

impl StationListQuery {
    /// Page number normalized to >= 1.
    pub fn page(&self) -> u64 {
        if self.page <= 0 {
            1
        } else {
            self.page as u64
        }
    }

    /// Page size normalized to >= 1, defaulting to 10. No upper bound:
    /// callers may pass a huge page size to fetch everything.
    pub fn page_size(&self) -> u64 {
        if self.page_size <= 0 {
            10
        } else {
            self.page_size as u64
        }
    }

    /// Search text, None when absent or blank.
    pub fn search_text(&self) -> Option<&str> {
        self.q.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    /// Status filter, None when absent or blank.
    pub fn status_filter(&self) -> Option<&str> {
        self.status
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Minimum-bikes filter, None unless strictly positive.
    pub fn min_bikes_filter(&self) -> Option<i64> {
        self.min_bikes.filter(|&n| n > 0)
    }

    /// Whether the sort direction is descending.
    pub fn descending(&self) -> bool {
        self.dir
            .as_deref()
            .map(|d| d.eq_ignore_ascii_case("desc"))
            .unwrap_or(false)
    }
}
