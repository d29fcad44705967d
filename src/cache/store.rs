//! Query Cache Module
//!
//! Caches query pages keyed by the full parameter tuple plus a generation
//! counter, and the summary under a single fixed slot. Bumping the generation
//! orphans every page key minted under older generations, so stale
//! computations are never returned; the summary slot is evicted explicitly
//! instead of namespaced.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::RwLock;

use crate::cache::CacheEntry;
use crate::models::{BikeSummary, Station, StationListQuery};

/// Default entry lifetime: five minutes.
pub const DEFAULT_TTL: Duration = Duration::from_secs(300);

// == Page Key ==
/// Cache key for a query page: the generation plus every query parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageKey {
    pub generation: u64,
    pub q: Option<String>,
    pub status: Option<String>,
    pub min_bikes: Option<i64>,
    pub sort: Option<String>,
    pub dir: Option<String>,
    pub page: i64,
    pub page_size: i64,
}

impl PageKey {
    /// Builds the key for `params` under `generation`.
    pub fn new(generation: u64, params: &StationListQuery) -> Self {
        Self {
            generation,
            q: params.q.clone(),
            status: params.status.clone(),
            min_bikes: params.min_bikes,
            sort: params.sort.clone(),
            dir: params.dir.clone(),
            page: params.page,
            page_size: params.page_size,
        }
    }
}

/// A cached query result: the page window plus the pre-pagination count.
#[derive(Debug, Clone, PartialEq)]
pub struct CachedPage {
    pub items: Vec<Station>,
    pub total_count: usize,
}

// == Query Cache ==
/// Thread-safe memoization of query pages and the summary.
///
/// Values are inserted whole, so readers never observe a torn computation.
/// Two callers missing simultaneously may both recompute; the last complete
/// insert wins.
#[derive(Debug)]
pub struct QueryCache {
    /// Monotonic counter bumped on every store mutation.
    generation: AtomicU64,
    /// Page entries; keys from superseded generations are swept on bump.
    pages: RwLock<HashMap<PageKey, CacheEntry<CachedPage>>>,
    /// The single summary slot.
    summary: RwLock<Option<CacheEntry<BikeSummary>>>,
    /// Entry lifetime.
    ttl: Duration,
}

impl QueryCache {
    /// Creates a cache whose entries live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            generation: AtomicU64::new(0),
            pages: RwLock::new(HashMap::new()),
            summary: RwLock::new(None),
            ttl,
        }
    }

    /// Current generation. Queries read this once and key everything they
    /// compute under it.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    // == Page Entries ==
    /// Looks up a page; expired entries are misses.
    pub async fn get_page(&self, key: &PageKey) -> Option<CachedPage> {
        let pages = self.pages.read().await;
        pages
            .get(key)
            .filter(|entry| !entry.is_expired())
            .map(|entry| entry.value().clone())
    }

    /// Stores a complete page under `key`.
    pub async fn insert_page(&self, key: PageKey, page: CachedPage) {
        let mut pages = self.pages.write().await;
        pages.insert(key, CacheEntry::new(page, self.ttl));
    }

    /// Number of live page entries (for tests and logging).
    pub async fn page_entry_count(&self) -> usize {
        self.pages.read().await.len()
    }

    // == Summary Slot ==
    /// The cached summary, None when absent or expired.
    pub async fn get_summary(&self) -> Option<BikeSummary> {
        let summary = self.summary.read().await;
        summary
            .as_ref()
            .filter(|entry| !entry.is_expired())
            .map(|entry| entry.value().clone())
    }

    /// Stores the summary.
    pub async fn insert_summary(&self, summary: BikeSummary) {
        let mut slot = self.summary.write().await;
        *slot = Some(CacheEntry::new(summary, self.ttl));
    }

    // == Invalidate ==
    /// Bumps the generation and evicts the summary slot. Called once per
    /// store mutation, before the mutating caller returns.
    ///
    /// Page entries from superseded generations are unreachable once the
    /// counter moves, so they are swept here rather than left for the TTL;
    /// an in-flight insert keyed under an old generation may still land
    /// afterwards, but its key can never be looked up again.
    pub async fn invalidate(&self) {
        let next = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let mut pages = self.pages.write().await;
        pages.retain(|key, _| key.generation >= next);
        drop(pages);

        let mut summary = self.summary.write().await;
        *summary = None;
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}
