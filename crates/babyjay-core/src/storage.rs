//! Storage trait — the persistent handle the session opens once at startup.
//!
//! The only state the bot keeps is whether it has run before, which gates
//! the first-run welcome message.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database path \"{}\" does not exist or is not readable", .0.display())]
    MissingDatabase(PathBuf),
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Persistent state behind the bot.
#[async_trait]
pub trait Storage: Send + Sync + Sized {
    /// Open the store at `path`.
    ///
    /// Fails with [`StorageError::MissingDatabase`] when `path` does not
    /// exist; implementations never create the file.
    async fn open(path: &Path) -> Result<Self, StorageError>;

    /// Whether no previous run has been recorded.
    async fn is_first_run(&self) -> Result<bool, StorageError>;

    /// Record that the bot has now run.
    async fn record_run(&self) -> Result<(), StorageError>;
}
