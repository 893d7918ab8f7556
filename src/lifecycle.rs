//! Logging setup and application wiring.

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::config::AppConfig;
use crate::db;
use crate::error::{AppError, Result};
use crate::repository::KvRepository;
use crate::service::{Debouncer, JobCache, JobsApi};
use crate::state::{listing, ActiveItemTracker, BookmarksStore, JobListing};

/// Initialize logging with tracing_subscriber.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("sqlx=warn".parse().unwrap())
                .add_directive("rmtdev=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .compact()
        .with_target(false)
        .init();
}

/// All state containers, wired over one cache and one local store.
pub struct App {
    pub config: AppConfig,
    pub cache: Arc<JobCache>,
    pub listing: Arc<JobListing>,
    pub bookmarks: Arc<BookmarksStore>,
    pub tracker: ActiveItemTracker,
    /// Streaming search input; settled values flow into `listing`.
    pub search_input: Mutex<Debouncer<String>>,
}

pub async fn bootstrap(config: AppConfig) -> Result<App> {
    let pool = db::init_db(&config.db_path)
        .await
        .map_err(|e| AppError::database(format!("{e:#}")))?;

    let api = JobsApi::new(&config)?;
    let cache = Arc::new(JobCache::new(Arc::new(api), config.cache_freshness));

    let listing = Arc::new(JobListing::new(cache.clone(), config.results_per_page));
    let bookmarks = Arc::new(
        BookmarksStore::load(KvRepository::new(pool), cache.clone()).await?,
    );

    let debouncer = Debouncer::new(String::new(), config.debounce_delay);
    listing::drive_debounced_search(listing.clone(), debouncer.subscribe());

    Ok(App {
        config,
        cache,
        listing,
        bookmarks,
        tracker: ActiveItemTracker::new(),
        search_input: Mutex::new(debouncer),
    })
}
