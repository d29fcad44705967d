//! Cache Module
//!
//! Memoizes query pages and the aggregate summary with TTL expiration and a
//! generation counter that namespaces keys across store mutations.

mod entry;
mod store;

// Re-export public types
pub use entry::CacheEntry;
pub use store::{CachedPage, PageKey, QueryCache, DEFAULT_TTL};
