//! Station Service Module
//!
//! Composes the station store with the query cache behind one cloneable
//! handle. HTTP handlers and the background refresher both go through here,
//! so every mutation is followed by exactly one cache invalidation before
//! the caller gets its result back.

use std::sync::Arc;

use rand::Rng;
use tokio::sync::RwLock;

use crate::cache::{CachedPage, PageKey, QueryCache};
use crate::error::Result;
use crate::models::{BikeSummary, Station, StationListQuery};
use crate::query;
use crate::store::StationStore;

// == Station Service ==
/// Cloneable handle over the shared store and cache.
#[derive(Clone)]
pub struct StationService {
    /// Authoritative station collection; mutators take the write lock for
    /// their whole read-modify-write.
    pub store: Arc<RwLock<StationStore>>,
    /// Query/summary cache with the generation counter.
    pub cache: Arc<QueryCache>,
}

impl StationService {
    /// Creates a service over a fresh store and cache.
    pub fn new(store: StationStore, cache: QueryCache) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            cache: Arc::new(cache),
        }
    }

    // == Query ==
    /// Filtered, sorted, paginated station page, served from cache when a
    /// fresh entry exists for these parameters under the current generation.
    ///
    /// Two callers missing at once may both recompute; each inserts a
    /// complete page, so readers never see a torn result.
    pub async fn query(&self, params: &StationListQuery) -> CachedPage {
        let key = PageKey::new(self.cache.generation(), params);

        if let Some(hit) = self.cache.get_page(&key).await {
            return hit;
        }

        let page = {
            let store = self.store.read().await;
            let (items, total_count) = query::run(store.stations(), params);
            CachedPage { items, total_count }
        };

        self.cache.insert_page(key, page.clone()).await;
        page
    }

    // == Get By Number ==
    /// Exact-match lookup, None when absent.
    pub async fn get_by_number(&self, number: i64) -> Option<Station> {
        let store = self.store.read().await;
        store.get_by_number(number).cloned()
    }

    // == Summary ==
    /// Aggregate over the full store, cached under the fixed slot until the
    /// TTL elapses or a mutation evicts it.
    pub async fn summary(&self) -> BikeSummary {
        if let Some(hit) = self.cache.get_summary().await {
            return hit;
        }

        let summary = {
            let store = self.store.read().await;
            query::summarize(store.stations())
        };

        self.cache.insert_summary(summary.clone()).await;
        summary
    }

    // == Create ==
    /// Appends a station and invalidates the cache. The generation bump is
    /// complete before this returns.
    pub async fn create(&self, station: Station) -> Result<Station> {
        let created = {
            let mut store = self.store.write().await;
            store.create(station)?
        };
        self.cache.invalidate().await;
        Ok(created)
    }

    // == Update ==
    /// Replaces a station's fields by number and invalidates the cache.
    /// An unknown number mutates nothing and invalidates nothing.
    pub async fn update(&self, number: i64, patch: Station) -> Result<Station> {
        let updated = {
            let mut store = self.store.write().await;
            store.update(number, patch)?
        };
        self.cache.invalidate().await;
        Ok(updated)
    }

    // == Refresh All ==
    /// Regenerates every station's live fields under one exclusive lock,
    /// then invalidates once for the whole cycle. Returns the number of
    /// stations touched.
    pub async fn refresh_all(&self, rng: &mut (impl Rng + Send)) -> usize {
        let count = {
            let mut store = self.store.write().await;
            store.refresh_all(rng);
            store.len()
        };
        self.cache.invalidate().await;
        count
    }
}
