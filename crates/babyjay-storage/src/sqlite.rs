//! SQLite storage.
//!
//! The database file must already exist; opening never creates it. Inside,
//! a single key/value table records bot metadata:
//!
//! ```sql
//! CREATE TABLE IF NOT EXISTS info (name TEXT PRIMARY KEY, val TEXT);
//! ```
//!
//! A `lastrun` row marks that the bot has started before.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::{debug, info};

use babyjay_core::{Storage, StorageError};

const CREATE_INFO_TABLE: &str =
    "CREATE TABLE IF NOT EXISTS info (name TEXT PRIMARY KEY, val TEXT)";

const LAST_RUN_KEY: &str = "lastrun";

fn backend(e: sqlx::Error) -> StorageError {
    StorageError::Backend(e.to_string())
}

// ─────────────────────────────────────────────
// SqliteStorage
// ─────────────────────────────────────────────

/// Bot metadata stored in a SQLite file.
#[derive(Clone, Debug)]
pub struct SqliteStorage {
    pool: SqlitePool,
}

impl SqliteStorage {
    /// Value of the `lastrun` row, if any.
    pub async fn last_run(&self) -> Result<Option<String>, StorageError> {
        let row: Option<(Option<String>,)> =
            sqlx::query_as("SELECT val FROM info WHERE name = ?")
                .bind(LAST_RUN_KEY)
                .fetch_optional(&self.pool)
                .await
                .map_err(backend)?;
        Ok(row.and_then(|(val,)| val))
    }
}

#[async_trait]
impl Storage for SqliteStorage {
    async fn open(path: &Path) -> Result<Self, StorageError> {
        // metadata() fails for both missing and unreadable paths
        if std::fs::metadata(path).is_err() {
            return Err(StorageError::MissingDatabase(path.to_path_buf()));
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(false)
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .map_err(backend)?;

        sqlx::query(CREATE_INFO_TABLE)
            .execute(&pool)
            .await
            .map_err(backend)?;

        info!(path = %path.display(), "opened database");
        Ok(Self { pool })
    }

    async fn is_first_run(&self) -> Result<bool, StorageError> {
        let last = self.last_run().await?;
        debug!(last_run = ?last, "checked run history");
        Ok(last.is_none())
    }

    async fn record_run(&self) -> Result<(), StorageError> {
        sqlx::query("INSERT OR REPLACE INTO info (name, val) VALUES (?, ?)")
            .bind(LAST_RUN_KEY)
            .bind(Utc::now().to_rfc3339())
            .execute(&self.pool)
            .await
            .map_err(backend)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_db(dir: &tempfile::TempDir) -> std::path::PathBuf {
        let path = dir.path().join("babyjaybot.db");
        std::fs::write(&path, b"").unwrap();
        path
    }

    #[tokio::test]
    async fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.db");

        let err = SqliteStorage::open(&path).await.unwrap_err();
        assert!(matches!(err, StorageError::MissingDatabase(ref p) if p == &path));
        // never created
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_fresh_database_is_first_run() {
        let dir = tempfile::tempdir().unwrap();
        let storage = SqliteStorage::open(&empty_db(&dir)).await.unwrap();

        assert!(storage.is_first_run().await.unwrap());
        assert_eq!(storage.last_run().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_record_run_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = empty_db(&dir);

        {
            let storage = SqliteStorage::open(&path).await.unwrap();
            storage.record_run().await.unwrap();
            assert!(!storage.is_first_run().await.unwrap());
        }

        let reopened = SqliteStorage::open(&path).await.unwrap();
        assert!(!reopened.is_first_run().await.unwrap());
        let stamp = reopened.last_run().await.unwrap().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(&stamp).is_ok());
    }

    #[tokio::test]
    async fn test_record_run_twice_keeps_one_row() {
        let dir = tempfile::tempdir().unwrap();
        let storage = SqliteStorage::open(&empty_db(&dir)).await.unwrap();

        storage.record_run().await.unwrap();
        storage.record_run().await.unwrap();

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM info WHERE name = 'lastrun'")
            .fetch_one(&storage.pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }
}
