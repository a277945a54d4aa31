//! BabyJayBot core — everything between the transport and the storage handle.
//!
//! This crate provides:
//! - **types**: roster, channel, inbound event and outbound response types
//! - **bus**: the bounded event queue fed by the transport
//! - **config**: schema, loading, and env var overrides
//! - **identity**: resolving which roster entry is the bot itself
//! - **classifier**: the four message predicates
//! - **dispatcher**: reply policy, startup greeting and first-run welcome
//! - **session**: the controller that wires it all together
//!
//! The transport (Slack) and the storage (SQLite) live in their own crates and
//! plug in through the [`Transport`] and [`Storage`] traits.

pub mod bus;
pub mod classifier;
pub mod config;
pub mod dispatcher;
pub mod identity;
pub mod session;
pub mod storage;
pub mod text_source;
pub mod transport;
pub mod types;
pub mod utils;

pub use classifier::{classify, Classification, ClassifyError};
pub use dispatcher::Dispatcher;
pub use identity::{resolve_identity, Identity};
pub use session::{Session, SessionError, SessionState};
pub use storage::{Storage, StorageError};
pub use text_source::{CannedJokes, TextSource};
pub use transport::Transport;
