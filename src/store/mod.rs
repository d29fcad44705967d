//! Station Store Module
//!
//! The authoritative in-memory collection of station records. Mutators keep
//! the derived fields consistent: `available_stands` is always re-derived and
//! `last_update` is stamped to now. Callers are responsible for holding
//! exclusive access for the duration of a mutation (see `StationService`).

mod load;

pub use load::load_stations;

use rand::Rng;

use crate::error::{ApiError, Result};
use crate::models::time::now_epoch_ms;
use crate::models::Station;

/// Bounds for the simulated capacity regenerated by a refresh cycle.
pub const REFRESH_STANDS_MIN: i64 = 10;
pub const REFRESH_STANDS_MAX: i64 = 40;

// == Station Store ==
/// Ordered in-memory collection of stations, keyed by unique `number`.
#[derive(Debug, Default)]
pub struct StationStore {
    stations: Vec<Station>,
}

impl StationStore {
    /// Creates a store from an initial list of records.
    pub fn new(stations: Vec<Station>) -> Self {
        Self { stations }
    }

    /// All stations in store order.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Current number of stations.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Returns true if the store holds no stations.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    // == Get By Number ==
    /// Exact-match lookup, None when absent.
    pub fn get_by_number(&self, number: i64) -> Option<&Station> {
        self.stations.iter().find(|s| s.number == number)
    }

    // == Create ==
    /// Appends a station, assigning the next free number when the body
    /// carries 0. Explicit numbers must not collide with an existing station.
    ///
    /// Re-derives `available_stands`, stamps `last_update`, and returns the
    /// stored record.
    pub fn create(&mut self, mut station: Station) -> Result<Station> {
        validate_counts(&station)?;

        if station.number == 0 {
            station.number = self
                .stations
                .iter()
                .map(|s| s.number)
                .max()
                .map_or(1, |max| max + 1);
        } else if self.get_by_number(station.number).is_some() {
            return Err(ApiError::InvalidRequest(format!(
                "Station number {} already exists",
                station.number
            )));
        }

        station.available_stands = station.bike_stands - station.available_bikes;
        station.last_update = now_epoch_ms();

        self.stations.push(station.clone());
        Ok(station)
    }

    // == Update ==
    /// Full field replace by number; the number itself is immutable.
    ///
    /// Returns NotFound (and leaves the store untouched) when the number is
    /// unknown.
    pub fn update(&mut self, number: i64, patch: Station) -> Result<Station> {
        validate_counts(&patch)?;

        let existing = self
            .stations
            .iter_mut()
            .find(|s| s.number == number)
            .ok_or(ApiError::NotFound(number))?;

        existing.name = patch.name;
        existing.address = patch.address;
        existing.status = patch.status;
        existing.bike_stands = patch.bike_stands;
        existing.available_bikes = patch.available_bikes;
        existing.available_stands = patch.bike_stands - patch.available_bikes;
        existing.position = patch.position;
        existing.last_update = now_epoch_ms();

        Ok(existing.clone())
    }

    // == Refresh All ==
    /// Regenerates every station's live fields: a capacity in
    /// [REFRESH_STANDS_MIN, REFRESH_STANDS_MAX], bikes in [0, capacity],
    /// derived free stands, and a fresh timestamp.
    pub fn refresh_all(&mut self, rng: &mut impl Rng) {
        let now = now_epoch_ms();
        for station in &mut self.stations {
            let stands = rng.gen_range(REFRESH_STANDS_MIN..=REFRESH_STANDS_MAX);
            let bikes = rng.gen_range(0..=stands);

            station.bike_stands = stands;
            station.available_bikes = bikes;
            station.available_stands = stands - bikes;
            station.last_update = now;
        }
    }
}

/// Rejects bodies whose counts cannot satisfy the store invariant
/// `0 <= available_bikes <= bike_stands`.
fn validate_counts(station: &Station) -> Result<()> {
    if station.bike_stands < 0 {
        return Err(ApiError::InvalidRequest(
            "bikeStands must not be negative".to_string(),
        ));
    }
    if station.available_bikes < 0 || station.available_bikes > station.bike_stands {
        return Err(ApiError::InvalidRequest(format!(
            "availableBikes must be between 0 and {}",
            station.bike_stands
        )));
    }
    Ok(())
}
