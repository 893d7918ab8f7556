//! Shared test utilities and fixtures
//!
//! This module provides common test helpers to reduce duplication
//! and make tests more robust against implementation changes.

#[cfg(test)]
pub mod fixtures {
    use chrono::{TimeZone, Utc};
    use sqlx::SqlitePool;

    use crate::domain::models::{JobId, JobItem, JobItemContent};

    /// Creates an in-memory SQLite database with migrations applied
    pub async fn setup_test_db() -> SqlitePool {
        let pool = sqlx::sqlite::SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to create test database");
        sqlx::migrate!()
            .run(&pool)
            .await
            .expect("Failed to run migrations");
        pool
    }

    /// A list-view posting with neutral field values
    pub fn sample_item(id: u32) -> JobItem {
        item_with(id, 2, 7)
    }

    /// A list-view posting with the fields the sort orders look at
    pub fn item_with(id: u32, days_ago: i64, relevance_score: i64) -> JobItem {
        JobItem {
            id: JobId(id),
            badge_letters: "RD".into(),
            title: format!("Rust Developer {id}"),
            company: "Acme Remote".into(),
            days_ago,
            date: Utc.with_ymd_and_hms(2026, 7, 20, 12, 0, 0).unwrap(),
            relevance_score,
        }
    }

    /// Full detail for a posting, matching `sample_item(id)`
    pub fn sample_content(id: u32) -> JobItemContent {
        JobItemContent {
            item: sample_item(id),
            description: "Build and maintain data plumbing in Rust.".into(),
            job_type: "Full-time".into(),
            salary: "$120,000+".into(),
            location: "Remote".into(),
            requirements: "3+ years of systems programming".into(),
            apply_link: "https://acme-remote.example/apply".into(),
            duration: "Permanent".into(),
            qualifications: vec!["Rust".into(), "SQL".into()],
            reviews: vec!["Supportive team".into()],
            company_url: "https://acme-remote.example".into(),
            cover_img_url: "https://acme-remote.example/cover.png".into(),
        }
    }
}
