//! Initial data load
//!
//! One-time load of the station list from a JSON file. A missing or
//! malformed file yields an empty store rather than failing startup.

use std::fs;
use std::path::Path;

use tracing::warn;

use crate::models::Station;

/// Loads the initial station list from `path`.
///
/// Field matching follows the upstream file layout (camelCase plus the
/// `last_update` epoch field); snake_case variants are also accepted.
pub fn load_stations(path: impl AsRef<Path>) -> Vec<Station> {
    let path = path.as_ref();

    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) => {
            warn!("Could not read station data file {}: {}", path.display(), e);
            return Vec::new();
        }
    };

    match serde_json::from_str(&json) {
        Ok(stations) => stations,
        Err(e) => {
            warn!(
                "Could not parse station data file {}: {}",
                path.display(),
                e
            );
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"number": 1, "name": "A", "status": "OPEN", "bikeStands": 24,
                  "availableBikes": 10, "availableStands": 14,
                  "position": {{"lat": 53.3, "lng": -6.2}},
                  "last_update": 1700018764000}},
                {{"number": 2, "name": "B", "status": "CLOSED", "bikeStands": 10,
                  "availableBikes": 0, "availableStands": 10,
                  "position": {{"lat": 53.4, "lng": -6.3}},
                  "last_update": 1700018764000}}
            ]"#
        )
        .unwrap();

        let stations = load_stations(file.path());
        assert_eq!(stations.len(), 2);
        assert_eq!(stations[0].number, 1);
        assert_eq!(stations[1].status, "CLOSED");
    }

    #[test]
    fn test_load_missing_file_yields_empty() {
        let stations = load_stations("/definitely/not/a/real/path.json");
        assert!(stations.is_empty());
    }

    #[test]
    fn test_load_malformed_file_yields_empty() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json ]").unwrap();

        let stations = load_stations(file.path());
        assert!(stations.is_empty());
    }
}
