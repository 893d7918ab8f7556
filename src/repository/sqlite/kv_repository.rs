//! JSON key-value persistence over the local SQLite store.
//!
//! One row per key; values are JSON strings. Unreadable values fall back
//! to the caller's default so a corrupt entry never wedges startup.

use anyhow::{Context, Result};
use serde::{de::DeserializeOwned, Serialize};
use sqlx::{Row, SqlitePool};
use tracing::warn;

pub struct KvRepository {
    pool: SqlitePool,
}

impl KvRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Read and parse the value under `key`, falling back to `default`
    /// when the key is absent or its value does not parse.
    pub async fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> Result<T> {
        let row = sqlx::query("SELECT value FROM kv_store WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .context("Failed to read from kv_store")?;

        let Some(row) = row else {
            return Ok(default);
        };

        let raw: String = row.get("value");
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(value),
            Err(e) => {
                warn!("Stored value under '{}' is unreadable, using default: {}", key, e);
                Ok(default)
            }
        }
    }

    /// Serialize `value` and upsert it under `key`.
    pub async fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value).context("Failed to serialize value")?;

        sqlx::query(
            "INSERT INTO kv_store (key, value) VALUES (?, ?)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = datetime('now')",
        )
        .bind(key)
        .bind(raw)
        .execute(&self.pool)
        .await
        .context("Failed to write to kv_store")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures;

    #[tokio::test]
    async fn test_get_or_returns_default_when_absent() {
        let repo = KvRepository::new(fixtures::setup_test_db().await);

        let ids: Vec<u32> = repo.get_or("bookmarkedIDs", vec![]).await.unwrap();
        assert!(ids.is_empty());
    }

    #[tokio::test]
    async fn test_set_then_get_round_trips() {
        let repo = KvRepository::new(fixtures::setup_test_db().await);

        repo.set("bookmarkedIDs", &vec![1u32, 2, 3]).await.unwrap();

        let ids: Vec<u32> = repo.get_or("bookmarkedIDs", vec![]).await.unwrap();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_set_overwrites_existing_value() {
        let repo = KvRepository::new(fixtures::setup_test_db().await);

        repo.set("bookmarkedIDs", &vec![1u32]).await.unwrap();
        repo.set("bookmarkedIDs", &vec![4u32, 5]).await.unwrap();

        let ids: Vec<u32> = repo.get_or("bookmarkedIDs", vec![]).await.unwrap();
        assert_eq!(ids, vec![4, 5]);
    }

    #[tokio::test]
    async fn test_get_or_falls_back_on_malformed_value() {
        let pool = fixtures::setup_test_db().await;

        sqlx::query("INSERT INTO kv_store (key, value) VALUES ('bookmarkedIDs', 'not json[')")
            .execute(&pool)
            .await
            .unwrap();

        let repo = KvRepository::new(pool);
        let ids: Vec<u32> = repo.get_or("bookmarkedIDs", vec![9]).await.unwrap();
        assert_eq!(ids, vec![9], "malformed value falls back to the default");
    }
}
