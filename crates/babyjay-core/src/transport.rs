//! Transport trait — the abstract interface to the messaging platform.
//!
//! A transport is responsible for:
//! - `connect()` — authenticate, fetch the workspace snapshot, publish a
//!   `Start` event, then stream `Message`/`Error` events (long-running)
//! - `stop()` — close the connection
//! - `post_message_to_channel()` — deliver one outbound message
//! - `name()` — identifier used in logs

use std::sync::Arc;

use async_trait::async_trait;

use crate::bus::EventBus;
use crate::types::PostOptions;

/// Connection to a messaging platform.
///
/// The session controller holds an `Arc<dyn Transport>`; it never reaches
/// into the socket or the HTTP client directly.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Short transport name (e.g. "slack").
    fn name(&self) -> &str;

    /// Connect and pump events into `bus` until the connection ends.
    ///
    /// Must publish exactly one `TransportEvent::Start` before any message.
    /// Returns when the stream closes or fails; it does not reconnect.
    async fn connect(&self, bus: Arc<EventBus>) -> anyhow::Result<()>;

    /// Close the connection, if any.
    async fn stop(&self) -> anyhow::Result<()>;

    /// Post `text` to a channel, given by name or by id.
    async fn post_message_to_channel(
        &self,
        channel: &str,
        text: &str,
        options: &PostOptions,
    ) -> anyhow::Result<()>;
}
