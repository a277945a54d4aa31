//! Message classification — four independent predicates over one event.
//!
//! Each predicate is pure, so the dispatcher can combine them freely and each
//! can be tested without a connection. [`classify`] runs all four with the
//! required guard ordering.

use thiserror::Error;

use crate::identity::Identity;
use crate::types::InboundEvent;

/// Keyword that always counts as a mention, whatever the bot is called.
const MENTION_KEYWORD: &str = "jay";

/// Slack prefixes public channel ids with `C` (DMs use `D`, groups `G`).
const PUBLIC_CHANNEL_PREFIX: char = 'C';

/// Predicate called on an event that lacks the input it needs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    #[error("event has no text; check is_chat_message first")]
    MissingText,
}

/// The four facets of one inbound event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Classification {
    pub is_chat_message: bool,
    pub is_channel_conversation: bool,
    pub is_from_self: bool,
    pub mentions_bot: bool,
}

/// A `"message"` event carrying non-empty text.
pub fn is_chat_message(event: &InboundEvent) -> bool {
    event.event_type == "message" && event.text.as_deref().is_some_and(|t| !t.is_empty())
}

/// Posted in a public channel.
///
/// Relies on Slack's id convention only; any id not starting with `C`
/// (DMs, private groups, missing channel) is not a channel conversation.
pub fn is_channel_conversation(event: &InboundEvent) -> bool {
    event
        .channel
        .as_deref()
        .and_then(|c| c.chars().next())
        .is_some_and(|first| first == PUBLIC_CHANNEL_PREFIX)
}

/// Sent by the bot itself. Never true when the identity is unresolved.
pub fn is_from_self(event: &InboundEvent, identity: Option<&Identity>) -> bool {
    match (identity.and_then(|i| i.resolved_user_id.as_deref()), event.user.as_deref()) {
        (Some(own_id), Some(user)) => own_id == user,
        _ => false,
    }
}

/// Text mentions "jay" or the configured name, case-insensitively.
pub fn mentions_bot(event: &InboundEvent, configured_name: &str) -> Result<bool, ClassifyError> {
    let text = event
        .text
        .as_deref()
        .ok_or(ClassifyError::MissingText)?
        .to_lowercase();

    Ok(text.contains(MENTION_KEYWORD) || text.contains(&configured_name.to_lowercase()))
}

/// Run every predicate against one event.
///
/// The mention check only runs on chat messages; for anything else
/// `mentions_bot` is `false`.
pub fn classify(
    event: &InboundEvent,
    identity: Option<&Identity>,
    configured_name: &str,
) -> Classification {
    let is_chat_message = is_chat_message(event);
    let mentions_bot = is_chat_message && mentions_bot(event, configured_name).unwrap_or(false);

    Classification {
        is_chat_message,
        is_channel_conversation: is_channel_conversation(event),
        is_from_self: is_from_self(event, identity),
        mentions_bot,
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
