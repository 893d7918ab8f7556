// src/config.rs
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Public job board API serving the postings.
pub const DEFAULT_API_BASE_URL: &str =
    "https://bytegrad.com/course-assets/projects/rmtdev/api/data";

const DEFAULT_DB_FILE: &str = "rmtdev.db";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base_url: String,
    pub db_path: PathBuf,
    /// Client-side page size; the list endpoint returns the full match set.
    pub results_per_page: usize,
    pub debounce_delay: Duration,
    /// How long a fetched value is served from cache before a refetch.
    pub cache_freshness: Duration,
    pub request_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let api_base_url =
            env::var("RMTDEV_API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());

        let db_path = env::var("RMTDEV_DB_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DB_FILE));

        Self {
            api_base_url,
            db_path,
            results_per_page: 7,
            debounce_delay: Duration::from_millis(500),
            cache_freshness: Duration::from_secs(60 * 60),
            request_timeout: Duration::from_secs(30),
        }
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    pub fn with_db_path(mut self, path: PathBuf) -> Self {
        self.db_path = path;
        self
    }

    pub fn with_results_per_page(mut self, per_page: usize) -> Self {
        self.results_per_page = per_page;
        self
    }

    pub fn with_debounce_delay(mut self, delay: Duration) -> Self {
        self.debounce_delay = delay;
        self
    }

    pub fn with_cache_freshness(mut self, freshness: Duration) -> Self {
        self.cache_freshness = freshness;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_overrides() {
        let config = AppConfig::from_env()
            .with_api_base_url("http://localhost:1234/data")
            .with_results_per_page(3);

        assert_eq!(config.api_base_url, "http://localhost:1234/data");
        assert_eq!(config.results_per_page, 3);
        assert_eq!(config.debounce_delay, Duration::from_millis(500));
        assert_eq!(config.cache_freshness, Duration::from_secs(3600));
    }
}
