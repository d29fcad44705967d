//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Path to the initial station data file (JSON)
    pub data_file: String,
    /// TTL in seconds for cached query results and the summary
    pub cache_ttl: u64,
    /// Minimum delay in seconds between occupancy refresh cycles
    pub refresh_min_secs: u64,
    /// Maximum delay in seconds between occupancy refresh cycles
    pub refresh_max_secs: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `DATA_FILE` - Initial station data file (default: data/dublinbike.json)
    /// - `CACHE_TTL` - Cache TTL in seconds (default: 300)
    /// - `REFRESH_MIN_SECS` - Minimum refresh delay (default: 10)
    /// - `REFRESH_MAX_SECS` - Maximum refresh delay (default: 20)
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            data_file: env::var("DATA_FILE")
                .unwrap_or_else(|_| "data/dublinbike.json".to_string()),
            cache_ttl: env::var("CACHE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
            refresh_min_secs: env::var("REFRESH_MIN_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            refresh_max_secs: env::var("REFRESH_MAX_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(20),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            data_file: "data/dublinbike.json".to_string(),
            cache_ttl: 300,
            refresh_min_secs: 10,
            refresh_max_secs: 20,
        }
    }
}
