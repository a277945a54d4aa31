//! BabyJayBot Slack transport.
//!
//! This crate provides:
//! - **web_api**: a thin Slack Web API client (`rtm.connect`, `users.list`,
//!   `conversations.list`, `chat.postMessage`)
//! - **rtm**: `SlackRtmTransport`, the [`babyjay_core::Transport`] that
//!   streams real-time events over a WebSocket

pub mod rtm;
pub mod web_api;

pub use rtm::SlackRtmTransport;
pub use web_api::SlackWebApi;
