//! Cache Entry Module
//!
//! A value paired with its expiry instant. Expired entries are treated as
//! absent by the cache, whatever their generation.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A cached value with a fixed time-to-live from insertion.
#[derive(Debug, Clone)]
pub struct CacheEntry<T> {
    value: T,
    expires_at: Instant,
}

impl<T> CacheEntry<T> {
    /// Creates an entry expiring `ttl` from now.
    pub fn new(value: T, ttl: Duration) -> Self {
        Self {
            value,
            expires_at: Instant::now() + ttl,
        }
    }

    /// An entry is expired once the TTL has fully elapsed.
    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }

    /// The cached value, regardless of expiry; callers check `is_expired`.
    pub fn value(&self) -> &T {
        &self.value
    }
}
