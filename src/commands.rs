use anyhow::anyhow;

use crate::domain::models::{JobId, JobItemContent, JobPage, SortBy};
use crate::error::Result;
use crate::lifecycle::App;

pub async fn search_jobs(app: &App, text: &str, sort_by: SortBy, page: usize) -> Result<JobPage> {
    app.listing.set_sort_by(sort_by).await;
    app.listing.set_search_text(text).await;
    app.listing.set_page(page).await;
    app.listing.results().await
}

/// Resolve `target` to a posting id and fetch its detail. Accepts a URL
/// with a fragment, a bare `#fragment`, or a plain integer.
pub async fn show_job(app: &App, target: &str) -> Result<JobItemContent> {
    app.tracker.set_location(target);

    let id = match app.tracker.active_id() {
        Some(id) => id,
        None => target
            .parse::<JobId>()
            .map_err(|_| anyhow!("no job id in {target:?}"))?,
    };

    app.cache.get_content(id).await
}

/// Returns whether the id is bookmarked after the toggle.
pub async fn toggle_bookmark(app: &App, id: JobId) -> Result<bool> {
    app.bookmarks.toggle(id).await
}

pub async fn bookmarked_ids(app: &App) -> Vec<JobId> {
    app.bookmarks.ids().await
}

pub async fn bookmarked_jobs(app: &App) -> Vec<JobItemContent> {
    app.bookmarks.hydrated().await
}
