//! Query Engine Module
//!
//! Pure functions over a station slice: conjunctive filtering, total-order
//! sorting, pagination, and the aggregate summary. No side effects; callers
//! layer caching on top (see `cache`).


use std::cmp::Ordering;

use crate::models::time::{epoch_to_utc, localize};
use crate::models::{BikeSummary, Station, StationListQuery};

// == Sort Key ==
/// Recognized sort keys; anything unknown orders by number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SortKey {
    Name,
    Bikes,
    Occupancy,
    Number,
}

impl SortKey {
    fn parse(sort: Option<&str>) -> Self {
        match sort.map(str::to_ascii_lowercase).as_deref() {
            Some("name") => SortKey::Name,
            Some("bikes") => SortKey::Bikes,
            Some("occupancy") => SortKey::Occupancy,
            _ => SortKey::Number,
        }
    }

    fn compare(self, a: &Station, b: &Station) -> Ordering {
        match self {
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::Bikes => a.available_bikes.cmp(&b.available_bikes),
            SortKey::Occupancy => a
                .occupancy()
                .partial_cmp(&b.occupancy())
                .unwrap_or(Ordering::Equal),
            SortKey::Number => a.number.cmp(&b.number),
        }
    }
}

// == Run ==
/// Filters, sorts, and paginates the given stations.
///
/// Returns the page window and the total count after filtering but before
/// pagination. Ties under the selected key are broken by station number, so
/// the ordering is total and pagination is stable.
pub fn run(stations: &[Station], params: &StationListQuery) -> (Vec<Station>, usize) {
    let mut matched: Vec<&Station> = stations.iter().filter(|s| matches(s, params)).collect();

    let key = SortKey::parse(params.sort.as_deref());
    let descending = params.descending();
    matched.sort_by(|a, b| {
        let ord = key.compare(a, b).then_with(|| a.number.cmp(&b.number));
        if descending {
            ord.reverse()
        } else {
            ord
        }
    });

    let total_count = matched.len();
    let page = params.page();
    let page_size = params.page_size();
    let skip = (page - 1).saturating_mul(page_size);

    let items = matched
        .into_iter()
        .skip(usize::try_from(skip).unwrap_or(usize::MAX))
        .take(usize::try_from(page_size).unwrap_or(usize::MAX))
        .cloned()
        .collect();

    (items, total_count)
}

/// Conjunctive filter predicate: search, then status, then minimum bikes.
pub fn matches(station: &Station, params: &StationListQuery) -> bool {
    if let Some(q) = params.search_text() {
        let q = q.to_lowercase();
        let name_hit = station.name.to_lowercase().contains(&q);
        let address_hit = station
            .address
            .as_deref()
            .map(|a| a.to_lowercase().contains(&q))
            .unwrap_or(false);
        if !name_hit && !address_hit {
            return false;
        }
    }

    if let Some(status) = params.status_filter() {
        if !station.status.eq_ignore_ascii_case(status) {
            return false;
        }
    }

    if let Some(min_bikes) = params.min_bikes_filter() {
        if station.available_bikes < min_bikes {
            return false;
        }
    }

    true
}

// == Summarize ==
/// Aggregates over the full, unfiltered station slice.
pub fn summarize(stations: &[Station]) -> BikeSummary {
    let total_stations = stations.len();
    let total_bike_stands = stations.iter().map(|s| s.bike_stands).sum();
    let total_available_bikes = stations.iter().map(|s| s.available_bikes).sum();
    let total_available_stands = stations.iter().map(|s| s.available_stands).sum();

    let open_stations = stations.iter().filter(|s| s.is_open()).count();
    let closed_stations = total_stations - open_stations;

    let with_stands: Vec<f64> = stations
        .iter()
        .filter(|s| s.bike_stands > 0)
        .map(|s| s.occupancy())
        .collect();
    let average_occupancy = if with_stands.is_empty() {
        0.0
    } else {
        with_stands.iter().sum::<f64>() / with_stands.len() as f64
    };

    let latest = stations.iter().map(|s| s.last_update).max().filter(|&t| t > 0);
    let latest_update_utc = latest.map(epoch_to_utc);
    let latest_update_local = latest_update_utc.map(localize);

    BikeSummary {
        total_stations,
        total_bike_stands,
        total_available_bikes,
        total_available_stands,
        open_stations,
        closed_stations,
        average_occupancy,
        latest_update_utc,
        latest_update_local,
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Vec<Station> {
        vec![
            Station {
                number: 1,
                name: "CLARENDON ROW".to_string(),
                address: Some("Clarendon Row".to_string()),
                status: "OPEN".to_string(),
                bike_stands: 24,
                available_bikes: 10,
                available_stands: 14,
                position: Default::default(),
                last_update: 1700018764000,
            },
            Station {
                number: 2,
                name: "PARK STATION".to_string(),
                address: Some("Park Street".to_string()),
                status: "OPEN".to_string(),
                bike_stands: 20,
                available_bikes: 5,
                available_stands: 15,
                position: Default::default(),
                last_update: 1700018765000,
            },
            Station {
                number: 3,
                name: "CLOSED STATION".to_string(),
                address: Some("Hidden Street".to_string()),
                status: "CLOSED".to_string(),
                bike_stands: 10,
                available_bikes: 0,
                available_stands: 10,
                position: Default::default(),
                last_update: 1700018763000,
            },
        ]
    }

    fn params() -> StationListQuery {
        StationListQuery {
            page: 1,
            page_size: 10,
            ..Default::default()
        }
    }

    #[test]
    fn test_no_filters_returns_all_by_number() {
        let (items, total) = run(&fixture(), &params());
        assert_eq!(total, 3);
        let numbers: Vec<i64> = items.iter().map(|s| s.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_filter_by_status_open_only() {
        let p = StationListQuery {
            status: Some("open".to_string()),
            ..params()
        };
        let (items, total) = run(&fixture(), &p);
        assert_eq!(total, 2);
        assert!(items.iter().all(|s| s.status == "OPEN"));
    }

    #[test]
    fn test_search_matches_name_or_address_case_insensitive() {
        let p = StationListQuery {
            q: Some("park".to_string()),
            ..params()
        };
        let (items, total) = run(&fixture(), &p);
        assert_eq!(total, 1);
        assert_eq!(items[0].number, 2);

        // "street" only appears in addresses
        let p = StationListQuery {
            q: Some("STREET".to_string()),
            ..params()
        };
        let (_, total) = run(&fixture(), &p);
        assert_eq!(total, 2);
    }

    #[test]
    fn test_filter_by_min_bikes() {
        let p = StationListQuery {
            min_bikes: Some(5),
            ..params()
        };
        let (items, total) = run(&fixture(), &p);
        assert_eq!(total, 2);
        assert!(items.iter().all(|s| s.available_bikes >= 5));
    }

    #[test]
    fn test_min_bikes_zero_is_no_filter() {
        let p = StationListQuery {
            min_bikes: Some(0),
            ..params()
        };
        let (_, total) = run(&fixture(), &p);
        assert_eq!(total, 3);
    }

    #[test]
    fn test_sort_by_bikes_desc() {
        let p = StationListQuery {
            sort: Some("bikes".to_string()),
            dir: Some("desc".to_string()),
            ..params()
        };
        let (items, _) = run(&fixture(), &p);
        let bikes: Vec<i64> = items.iter().map(|s| s.available_bikes).collect();
        assert_eq!(bikes, vec![10, 5, 0]);
    }

    #[test]
    fn test_sort_by_name_asc() {
        let p = StationListQuery {
            sort: Some("NAME".to_string()),
            ..params()
        };
        let (items, _) = run(&fixture(), &p);
        let names: Vec<&str> = items.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["CLARENDON ROW", "CLOSED STATION", "PARK STATION"]);
    }

    #[test]
    fn test_sort_by_occupancy() {
        // occupancies: 10/24 ≈ 0.417, 5/20 = 0.25, 0/10 = 0
        let p = StationListQuery {
            sort: Some("occupancy".to_string()),
            ..params()
        };
        let (items, _) = run(&fixture(), &p);
        let numbers: Vec<i64> = items.iter().map(|s| s.number).collect();
        assert_eq!(numbers, vec![3, 2, 1]);
    }

    #[test]
    fn test_unknown_sort_key_falls_back_to_number() {
        let p = StationListQuery {
            sort: Some("altitude".to_string()),
            dir: Some("desc".to_string()),
            ..params()
        };
        let (items, _) = run(&fixture(), &p);
        let numbers: Vec<i64> = items.iter().map(|s| s.number).collect();
        assert_eq!(numbers, vec![3, 2, 1]);
    }

    #[test]
    fn test_ties_broken_by_number() {
        let mut stations = fixture();
        for s in &mut stations {
            s.available_bikes = 5;
        }
        let p = StationListQuery {
            sort: Some("bikes".to_string()),
            ..params()
        };
        let (items, _) = run(&stations, &p);
        let numbers: Vec<i64> = items.iter().map(|s| s.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_pagination_window() {
        let p = StationListQuery {
            page: 2,
            page_size: 2,
            ..Default::default()
        };
        let (items, total) = run(&fixture(), &p);
        assert_eq!(total, 3);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].number, 3);
    }

    #[test]
    fn test_page_beyond_end_is_empty() {
        let p = StationListQuery {
            page: 9,
            page_size: 10,
            ..Default::default()
        };
        let (items, total) = run(&fixture(), &p);
        assert_eq!(total, 3);
        assert!(items.is_empty());
    }

    #[test]
    fn test_huge_page_size_fetches_all() {
        let p = StationListQuery {
            page: 1,
            page_size: i64::MAX,
            ..Default::default()
        };
        let (items, total) = run(&fixture(), &p);
        assert_eq!(items.len(), total);
    }

    #[test]
    fn test_summarize_fixture() {
        let summary = summarize(&fixture());
        assert_eq!(summary.total_stations, 3);
        assert_eq!(summary.total_bike_stands, 54);
        assert_eq!(summary.total_available_bikes, 15);
        assert_eq!(summary.total_available_stands, 39);
        assert_eq!(summary.open_stations, 2);
        assert_eq!(summary.closed_stations, 1);

        let expected = (10.0 / 24.0 + 5.0 / 20.0 + 0.0) / 3.0;
        assert!((summary.average_occupancy - expected).abs() < 1e-9);

        assert_eq!(
            summary.latest_update_utc.unwrap().timestamp_millis(),
            1700018765000
        );
    }

    #[test]
    fn test_summarize_empty() {
        let summary = summarize(&[]);
        assert_eq!(summary.total_stations, 0);
        assert_eq!(summary.average_occupancy, 0.0);
        assert!(summary.latest_update_utc.is_none());
    }

    #[test]
    fn test_summarize_skips_zero_capacity_in_average() {
        let mut stations = fixture();
        stations[2].bike_stands = 0;
        stations[2].available_bikes = 0;
        let summary = summarize(&stations);

        let expected = (10.0 / 24.0 + 5.0 / 20.0) / 2.0;
        assert!((summary.average_occupancy - expected).abs() < 1e-9);
    }
}
