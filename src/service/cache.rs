//! Keyed cache over a [`JobFetcher`] with a freshness window and
//! per-key in-flight coalescing.
//!
//! A value fetched less than `freshness` ago is served without touching
//! the network. Concurrent callers of the same key serialize on a per-key
//! lock; whoever wins fetches, the rest find the fresh entry when they
//! acquire the lock. Failures are never cached.

use dashmap::DashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::debug;

use crate::domain::models::{JobId, JobItem, JobItemContent};
use crate::error::Result;
use crate::service::fetcher::JobFetcher;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum CacheKey {
    Content(JobId),
    Search(String),
}

struct CachedValue<T> {
    value: T,
    fetched_at: Instant,
}

impl<T: Clone> CachedValue<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            fetched_at: Instant::now(),
        }
    }

    fn fresh_value(&self, freshness: Duration) -> Option<T> {
        (self.fetched_at.elapsed() < freshness).then(|| self.value.clone())
    }
}

pub struct JobCache {
    fetcher: Arc<dyn JobFetcher>,
    freshness: Duration,
    contents: DashMap<JobId, CachedValue<JobItemContent>>,
    searches: DashMap<String, CachedValue<Vec<JobItem>>>,
    locks: DashMap<CacheKey, Arc<Mutex<()>>>,
}

impl JobCache {
    pub fn new(fetcher: Arc<dyn JobFetcher>, freshness: Duration) -> Self {
        Self {
            fetcher,
            freshness,
            contents: DashMap::new(),
            searches: DashMap::new(),
            locks: DashMap::new(),
        }
    }

    fn lock_for(&self, key: CacheKey) -> Arc<Mutex<()>> {
        self.locks
            .entry(key)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    fn fresh_content(&self, id: JobId) -> Option<JobItemContent> {
        self.contents
            .get(&id)
            .and_then(|entry| entry.fresh_value(self.freshness))
    }

    fn fresh_search(&self, text: &str) -> Option<Vec<JobItem>> {
        self.searches
            .get(text)
            .and_then(|entry| entry.fresh_value(self.freshness))
    }

    pub async fn get_content(&self, id: JobId) -> Result<JobItemContent> {
        if let Some(value) = self.fresh_content(id) {
            return Ok(value);
        }

        let lock = self.lock_for(CacheKey::Content(id));
        let _guard = lock.lock().await;

        // A coalesced waiter finds the winner's entry here
        if let Some(value) = self.fresh_content(id) {
            return Ok(value);
        }

        debug!("Cache miss for job {}, fetching", id);
        let value = self.fetcher.fetch_one(id).await?;
        self.contents.insert(id, CachedValue::new(value.clone()));
        Ok(value)
    }

    pub async fn search(&self, text: &str) -> Result<Vec<JobItem>> {
        if let Some(value) = self.fresh_search(text) {
            return Ok(value);
        }

        let lock = self.lock_for(CacheKey::Search(text.to_string()));
        let _guard = lock.lock().await;

        if let Some(value) = self.fresh_search(text) {
            return Ok(value);
        }

        debug!("Cache miss for search {:?}, fetching", text);
        let value = self.fetcher.fetch_many(text).await?;
        self.searches
            .insert(text.to_string(), CachedValue::new(value.clone()));
        Ok(value)
    }

    /// Drop the cached detail for `id`; the next access refetches.
    pub fn invalidate(&self, id: JobId) {
        self.contents.remove(&id);
    }

    /// Drop the cached result list for `text`; the next access refetches.
    pub fn invalidate_search(&self, text: &str) {
        self.searches.remove(text);
    }
}
