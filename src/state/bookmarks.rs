//! Persistent bookmark list plus its hydrated detail view.
//!
//! The id list is the source of truth for what is bookmarked. It is read
//! from the local store once at construction and written back on every
//! change, before the mutating call returns.

use futures::future::join_all;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::warn;

use crate::domain::models::{JobId, JobItemContent};
use crate::error::{AppError, Result};
use crate::repository::KvRepository;
use crate::service::JobCache;

/// Storage key holding the JSON-encoded id array.
pub const BOOKMARKS_KEY: &str = "bookmarkedIDs";

pub struct BookmarksStore {
    repo: KvRepository,
    cache: Arc<JobCache>,
    ids: RwLock<Vec<JobId>>,
}

impl BookmarksStore {
    pub async fn load(repo: KvRepository, cache: Arc<JobCache>) -> Result<Self> {
        let ids: Vec<JobId> = repo
            .get_or(BOOKMARKS_KEY, Vec::new())
            .await
            .map_err(|e| AppError::database(format!("{e:#}")))?;
        Ok(Self {
            repo,
            cache,
            ids: RwLock::new(ids),
        })
    }

    /// Remove `id` if bookmarked, append it otherwise. Returns whether the
    /// id is bookmarked afterwards. The updated list is persisted before
    /// this returns.
    pub async fn toggle(&self, id: JobId) -> Result<bool> {
        let mut ids = self.ids.write().await;

        let bookmarked = if let Some(pos) = ids.iter().position(|&b| b == id) {
            ids.remove(pos);
            false
        } else {
            ids.push(id);
            true
        };

        self.repo
            .set(BOOKMARKS_KEY, &*ids)
            .await
            .map_err(|e| AppError::database(format!("{e:#}")))?;
        Ok(bookmarked)
    }

    /// Snapshot of the ordered id list.
    pub async fn ids(&self) -> Vec<JobId> {
        self.ids.read().await.clone()
    }

    pub async fn is_bookmarked(&self, id: JobId) -> bool {
        self.ids.read().await.contains(&id)
    }

    /// Full content for every bookmarked id, fetched in parallel through
    /// the cache. Ids whose fetch fails are dropped from the result and
    /// logged; order follows the id list.
    pub async fn hydrated(&self) -> Vec<JobItemContent> {
        let ids = self.ids().await;
        let fetches: Vec<_> = ids.iter().map(|&id| self.cache.get_content(id)).collect();
        let results = join_all(fetches).await;

        ids.iter()
            .zip(results)
            .filter_map(|(&id, result)| match result {
                Ok(content) => Some(content),
                Err(e) => {
                    warn!("Skipping bookmark {}: {}", id, e);
                    None
                }
            })
            .collect()
    }
}
