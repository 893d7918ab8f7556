//! HTTP client for the job board API.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use tracing::debug;

use crate::config::AppConfig;
use crate::domain::models::{
    ApiErrorBody, JobId, JobItem, JobItemContent, JobItemResponse, JobListResponse,
};
use crate::error::{AppError, Result};

/// Seam over the two remote operations so the cache and tests can
/// substitute implementations.
#[async_trait]
pub trait JobFetcher: Send + Sync {
    async fn fetch_one(&self, id: JobId) -> Result<JobItemContent>;
    async fn fetch_many(&self, search_text: &str) -> Result<Vec<JobItem>>;
}

pub struct JobsApi {
    client: Client,
    base_url: String,
}

impl JobsApi {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AppError::network(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Extract the server's `description` field, falling back to a generic
    /// message when the body is missing or not the documented shape.
    async fn error_message(status: StatusCode, response: Response) -> String {
        match response.json::<ApiErrorBody>().await {
            Ok(body) => body.description,
            Err(_) => format!("request failed with status {}", status.as_u16()),
        }
    }
}

#[async_trait]
impl JobFetcher for JobsApi {
    async fn fetch_one(&self, id: JobId) -> Result<JobItemContent> {
        let url = format!("{}/{}", self.base_url, id);
        debug!("Fetching job item: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::network(format!("Failed to fetch job item {id}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let message = Self::error_message(status, response).await;
            return Err(if status == StatusCode::NOT_FOUND {
                AppError::not_found(id, message)
            } else {
                AppError::api(status.as_u16(), message)
            });
        }

        let envelope: JobItemResponse = response
            .json()
            .await
            .map_err(|e| AppError::network(format!("Failed to parse job item {id}: {e}")))?;

        Ok(envelope.job_item)
    }

    async fn fetch_many(&self, search_text: &str) -> Result<Vec<JobItem>> {
        debug!("Searching job items: {:?}", search_text);

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("search", search_text)])
            .send()
            .await
            .map_err(|e| AppError::network(format!("Failed to search job items: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let message = Self::error_message(status, response).await;
            return Err(AppError::api(status.as_u16(), message));
        }

        let envelope: JobListResponse = response
            .json()
            .await
            .map_err(|e| AppError::network(format!("Failed to parse job list: {e}")))?;

        Ok(envelope.job_items)
    }
}
