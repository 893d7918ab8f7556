//! Domain entities - behavior lives WITH data

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ====== Identifiers ======

/// Server-assigned posting identifier, also carried in URL fragments.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct JobId(pub u32);

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for JobId {
    fn from(raw: u32) -> Self {
        JobId(raw)
    }
}

impl std::str::FromStr for JobId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u32>().map(JobId)
    }
}

// ====== Enums ======

/// Order applied to search results before pagination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    /// Highest relevance score first
    #[default]
    Relevant,
    /// Newest posting first
    Recent,
}

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Relevant => "relevant",
            SortBy::Recent => "recent",
        }
    }

    /// Stable sort; ties keep fetch order.
    pub fn sort(&self, items: &mut [JobItem]) {
        match self {
            SortBy::Relevant => {
                items.sort_by(|a, b| b.relevance_score.cmp(&a.relevance_score))
            }
            SortBy::Recent => items.sort_by(|a, b| a.days_ago.cmp(&b.days_ago)),
        }
    }
}

impl std::str::FromStr for SortBy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "relevant" => Ok(SortBy::Relevant),
            "recent" => Ok(SortBy::Recent),
            other => Err(anyhow::anyhow!("unknown sort order: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageDirection {
    Next,
    Previous,
}

// ====== Entities ======

/// List-view slice of a posting, produced by the search endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobItem {
    pub id: JobId,
    pub badge_letters: String,
    pub title: String,
    pub company: String,
    pub days_ago: i64,
    pub date: DateTime<Utc>,
    pub relevance_score: i64,
}

/// Full posting detail, produced by the single-item endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobItemContent {
    #[serde(flatten)]
    pub item: JobItem,
    pub description: String,
    pub job_type: String,
    pub salary: String,
    pub location: String,
    pub requirements: String,
    pub apply_link: String,
    pub duration: String,
    pub qualifications: Vec<String>,
    pub reviews: Vec<String>,
    #[serde(rename = "companyURL")]
    pub company_url: String,
    #[serde(rename = "coverImgURL")]
    pub cover_img_url: String,
}

impl JobItemContent {
    pub fn id(&self) -> JobId {
        self.item.id
    }
}

/// One client-side page of sorted results.
#[derive(Debug, Clone, PartialEq)]
pub struct JobPage {
    pub items: Vec<JobItem>,
    /// 1-based, clamped to the last non-empty page
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl JobPage {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            total_pages: 0,
            total_items: 0,
        }
    }
}

// ====== Wire envelopes ======

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobItemResponse {
    pub public: bool,
    pub job_item: JobItemContent,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobListResponse {
    pub job_items: Vec<JobItem>,
}

/// Error body shape shared by both endpoints.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub description: String,
}
