//! Core types — the roster/channel snapshot handed over by the transport,
//! inbound events, and the outbound responses the dispatcher builds.
//!
//! Field names follow Slack's wire format so the RTM frames deserialize
//! straight into these types.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────
// Workspace snapshot
// ─────────────────────────────────────────────

/// A known user in the workspace.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RosterEntry {
    pub id: String,
    pub name: String,
}

impl RosterEntry {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        RosterEntry {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A named, addressable conversation in the workspace.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Channel {
    pub id: String,
    pub name: String,
}

impl Channel {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Channel {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Roster + channel list, delivered once by the transport's "start" event.
///
/// The session only ever reads it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub users: Vec<RosterEntry>,
    pub channels: Vec<Channel>,
}

impl Snapshot {
    /// Human-readable name for a channel id, if the channel is known.
    pub fn channel_name(&self, id: &str) -> Option<&str> {
        self.channels
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.as_str())
    }

    /// Channel id for a channel name, if the channel is known.
    pub fn channel_id(&self, name: &str) -> Option<&str> {
        self.channels
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.id.as_str())
    }
}

// ─────────────────────────────────────────────
// Inbound
// ─────────────────────────────────────────────

/// A real-time event as pushed by the platform.
///
/// Only the fields the classifier looks at are kept; everything else in the
/// frame is dropped during deserialization.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct InboundEvent {
    #[serde(rename = "type", default)]
    pub event_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

impl InboundEvent {
    /// A `"message"` event with the given text, channel and sender.
    pub fn message(
        text: impl Into<String>,
        channel: impl Into<String>,
        user: impl Into<String>,
    ) -> Self {
        InboundEvent {
            event_type: "message".to_string(),
            text: Some(text.into()),
            channel: Some(channel.into()),
            user: Some(user.into()),
        }
    }
}

// ─────────────────────────────────────────────
// Outbound
// ─────────────────────────────────────────────

/// Formatting options sent alongside the text (`chat.postMessage` params).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PostOptions {
    /// Named emoji used as the message icon, e.g. `":cat:"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_emoji: Option<String>,
    /// Post as the authenticated bot user rather than a custom username.
    #[serde(default)]
    pub as_user: bool,
}

impl PostOptions {
    pub fn with_icon(emoji: impl Into<String>) -> Self {
        PostOptions {
            icon_emoji: Some(emoji.into()),
            as_user: false,
        }
    }

    pub fn as_user() -> Self {
        PostOptions {
            icon_emoji: None,
            as_user: true,
        }
    }
}

/// A message the bot wants delivered. Ownership passes to the transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutboundResponse {
    /// Channel name or channel id.
    pub target_channel: String,
    pub text: String,
    pub options: PostOptions,
}

impl OutboundResponse {
    pub fn new(
        target_channel: impl Into<String>,
        text: impl Into<String>,
        options: PostOptions,
    ) -> Self {
        OutboundResponse {
            target_channel: target_channel.into(),
            text: text.into(),
            options,
        }
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
