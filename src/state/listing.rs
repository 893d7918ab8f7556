//! Search text, sort order, and page cursor for the result list, plus the
//! fetch → sort → slice pipeline that produces one page of postings.

use std::sync::Arc;
use tokio::sync::{watch, RwLock};
use tokio::task::JoinHandle;

use crate::domain::models::{JobPage, PageDirection, SortBy};
use crate::error::Result;
use crate::service::JobCache;

struct ListingState {
    search_text: String,
    sort_by: SortBy,
    /// 1-based
    page: usize,
}

pub struct JobListing {
    cache: Arc<JobCache>,
    results_per_page: usize,
    inner: RwLock<ListingState>,
}

impl JobListing {
    pub fn new(cache: Arc<JobCache>, results_per_page: usize) -> Self {
        Self {
            cache,
            results_per_page,
            inner: RwLock::new(ListingState {
                search_text: String::new(),
                sort_by: SortBy::default(),
                page: 1,
            }),
        }
    }

    /// Changing the search resets the page cursor.
    pub async fn set_search_text(&self, text: impl Into<String>) {
        let mut inner = self.inner.write().await;
        inner.search_text = text.into();
        inner.page = 1;
    }

    /// Changing the sort order resets the page cursor.
    pub async fn set_sort_by(&self, sort_by: SortBy) {
        let mut inner = self.inner.write().await;
        inner.sort_by = sort_by;
        inner.page = 1;
    }

    pub async fn set_page(&self, page: usize) {
        let mut inner = self.inner.write().await;
        inner.page = page.max(1);
    }

    pub async fn change_page(&self, direction: PageDirection) {
        let mut inner = self.inner.write().await;
        inner.page = match direction {
            PageDirection::Next => inner.page + 1,
            PageDirection::Previous => inner.page.saturating_sub(1).max(1),
        };
    }

    pub async fn search_text(&self) -> String {
        self.inner.read().await.search_text.clone()
    }

    pub async fn sort_by(&self) -> SortBy {
        self.inner.read().await.sort_by
    }

    pub async fn page(&self) -> usize {
        self.inner.read().await.page
    }

    /// Fetch the full matching set, sort it, and slice out the current
    /// page. An empty search yields an empty page without a request.
    pub async fn results(&self) -> Result<JobPage> {
        let (text, sort_by, page) = {
            let inner = self.inner.read().await;
            (inner.search_text.clone(), inner.sort_by, inner.page)
        };

        if text.is_empty() {
            return Ok(JobPage::empty());
        }

        let mut items = self.cache.search(&text).await?;
        sort_by.sort(&mut items);

        let total_items = items.len();
        let total_pages = total_items.div_ceil(self.results_per_page);
        let page = page.min(total_pages.max(1));
        let start = (page - 1) * self.results_per_page;

        let items = items
            .into_iter()
            .skip(start)
            .take(self.results_per_page)
            .collect();

        Ok(JobPage {
            items,
            page,
            total_pages,
            total_items,
        })
    }
}

/// Apply every settled search value to the listing until the input side
/// is dropped. Dropping the debouncer ends the task.
pub fn drive_debounced_search(
    listing: Arc<JobListing>,
    mut rx: watch::Receiver<String>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while rx.changed().await.is_ok() {
            let text = rx.borrow_and_update().clone();
            listing.set_search_text(text).await;
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{JobId, JobItem, JobItemContent};
    use crate::service::{Debouncer, JobFetcher};
    use crate::test_utils::fixtures;
    use async_trait::async_trait;
    use std::time::Duration;

    struct ListFetcher {
        items: Vec<JobItem>,
    }

    #[async_trait]
    impl JobFetcher for ListFetcher {
        async fn fetch_one(&self, id: JobId) -> crate::error::Result<JobItemContent> {
            Ok(fixtures::sample_content(id.0))
        }

        async fn fetch_many(&self, _search_text: &str) -> crate::error::Result<Vec<JobItem>> {
            Ok(self.items.clone())
        }
    }

    fn listing_over(items: Vec<JobItem>, per_page: usize) -> JobListing {
        let cache = Arc::new(JobCache::new(
            Arc::new(ListFetcher { items }),
            Duration::from_secs(3600),
        ));
        JobListing::new(cache, per_page)
    }

    fn ten_items() -> Vec<JobItem> {
        (1..=10).map(|id| fixtures::item_with(id, id as i64, 0)).collect()
    }

    #[tokio::test]
    async fn test_empty_search_yields_empty_page_without_fetch() {
        let listing = listing_over(ten_items(), 7);

        let page = listing.results().await.unwrap();

        assert_eq!(page, JobPage::empty());
    }

    #[tokio::test]
    async fn test_results_are_sorted_and_sliced() {
        let listing = listing_over(ten_items(), 7);
        listing.set_search_text("dev").await;
        listing.set_sort_by(SortBy::Recent).await;

        let page = listing.results().await.unwrap();

        assert_eq!(page.total_items, 10);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.page, 1);
        assert_eq!(page.items.len(), 7);
        assert_eq!(page.items[0].id, JobId(1), "newest first");

        listing.change_page(PageDirection::Next).await;
        let page = listing.results().await.unwrap();

        assert_eq!(page.page, 2);
        assert_eq!(page.items.len(), 3, "final partial page");
        assert_eq!(page.items[0].id, JobId(8));
    }

    #[tokio::test]
    async fn test_page_clamps_at_both_ends() {
        let listing = listing_over(ten_items(), 7);
        listing.set_search_text("dev").await;

        listing.change_page(PageDirection::Previous).await;
        assert_eq!(listing.page().await, 1, "no page below the first");

        listing.set_page(99).await;
        let page = listing.results().await.unwrap();
        assert_eq!(page.page, 2, "clamped to the last page");
    }

    #[tokio::test]
    async fn test_changing_search_or_sort_resets_page() {
        let listing = listing_over(ten_items(), 7);
        listing.set_search_text("dev").await;
        listing.change_page(PageDirection::Next).await;
        assert_eq!(listing.page().await, 2);

        listing.set_sort_by(SortBy::Recent).await;
        assert_eq!(listing.page().await, 1);

        listing.change_page(PageDirection::Next).await;
        listing.set_search_text("rust").await;
        assert_eq!(listing.page().await, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_debounced_input_drives_search_text() {
        let listing = Arc::new(listing_over(ten_items(), 7));
        let mut debouncer = Debouncer::new(String::new(), Duration::from_millis(500));
        let driver = drive_debounced_search(listing.clone(), debouncer.subscribe());

        debouncer.update("a".to_string());
        tokio::time::advance(Duration::from_millis(100)).await;
        debouncer.update("ab".to_string());
        tokio::time::advance(Duration::from_millis(100)).await;
        debouncer.update("abc".to_string());

        tokio::time::advance(Duration::from_millis(600)).await;
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }

        assert_eq!(listing.search_text().await, "abc");

        drop(debouncer);
        driver.await.unwrap();
    }
}
