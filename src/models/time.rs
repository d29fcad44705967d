//! Timestamp derivation for station records
//!
//! Stations store their update time as epoch milliseconds; clients see a UTC
//! instant plus a best-effort local (Europe/Dublin) conversion. Localization
//! never fails: an unknown zone name falls back to the process local zone.

use chrono::{DateTime, FixedOffset, Local, TimeZone, Utc};
use chrono_tz::Tz;

/// IANA zone the inventory is displayed in.
pub const LOCAL_ZONE_NAME: &str = "Europe/Dublin";

/// Current time as epoch milliseconds.
pub fn now_epoch_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// Converts an epoch-milliseconds timestamp to a UTC instant.
///
/// Epochs at or below zero map to the minimum instant sentinel.
pub fn epoch_to_utc(epoch_ms: i64) -> DateTime<Utc> {
    if epoch_ms <= 0 {
        return DateTime::<Utc>::MIN_UTC;
    }
    Utc.timestamp_millis_opt(epoch_ms)
        .single()
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Converts a UTC instant to the configured local zone.
///
/// Falls back to the process local zone when the zone name cannot be
/// resolved. The sentinel minimum instant passes through unshifted so it
/// stays representable.
pub fn localize(utc: DateTime<Utc>) -> DateTime<FixedOffset> {
    if utc == DateTime::<Utc>::MIN_UTC {
        return utc.fixed_offset();
    }
    match LOCAL_ZONE_NAME.parse::<Tz>() {
        Ok(tz) => utc.with_timezone(&tz).fixed_offset(),
        Err(_) => utc.with_timezone(&Local).fixed_offset(),
    }
}
