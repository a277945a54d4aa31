//! Session control — the bot's lifecycle and event loop.
//!
//! A [`Session`] owns the transport handle, the storage handle, the resolved
//! identity and the dispatcher, and processes transport events one at a time.

pub mod controller;
pub mod state;

pub use controller::{Session, SessionError};
pub use state::SessionState;
