//! BabyJayBot storage — SQLite-backed implementation of the core
//! [`Storage`](babyjay_core::Storage) trait.

pub mod sqlite;

pub use sqlite::SqliteStorage;
