//! Response dispatch — turns a classified event into (at most) one reply.
//!
//! Reply policy, first matching rule wins:
//! 1. not a chat message → nothing
//! 2. sent by the bot itself → nothing (self-loop guard)
//! 3. public channel + mentions the bot → reply in the same channel, as user
//! 4. anything else → nothing
//!
//! Also builds the two fixed startup messages.

use std::sync::Arc;

use crate::classifier::Classification;
use crate::config::schema::BotConfig;
use crate::text_source::{CannedJokes, TextSource};
use crate::types::{InboundEvent, OutboundResponse, PostOptions};

/// Decides whether and how the bot answers.
pub struct Dispatcher {
    name: String,
    greeting_channel: String,
    icon_emoji: String,
    text_source: Arc<dyn TextSource>,
}

impl Dispatcher {
    pub fn new(
        name: impl Into<String>,
        greeting_channel: impl Into<String>,
        icon_emoji: impl Into<String>,
        text_source: Arc<dyn TextSource>,
    ) -> Self {
        Self {
            name: name.into(),
            greeting_channel: greeting_channel.into(),
            icon_emoji: icon_emoji.into(),
            text_source,
        }
    }

    /// Dispatcher configured from the `bot` section, replying with its jokes.
    pub fn from_config(bot: &BotConfig) -> Self {
        Self::new(
            bot.name.clone(),
            bot.greeting_channel.clone(),
            bot.icon_emoji.clone(),
            Arc::new(CannedJokes::new(bot.jokes.clone())),
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Apply the reply policy to one event.
    pub fn decide(
        &self,
        event: &InboundEvent,
        classification: &Classification,
    ) -> Option<OutboundResponse> {
        if !classification.is_chat_message || classification.is_from_self {
            return None;
        }
        if !(classification.is_channel_conversation && classification.mentions_bot) {
            return None;
        }

        let channel = event.channel.as_deref()?;
        Some(OutboundResponse::new(
            channel,
            self.text_source.next_text(),
            PostOptions::as_user(),
        ))
    }

    /// The greeting posted every time the bot connects.
    pub fn startup_greeting(&self) -> OutboundResponse {
        OutboundResponse::new(
            self.greeting_channel.as_str(),
            format!(
                "Hello ! I am {} I am here to make this Slack awesome !",
                self.name
            ),
            PostOptions::with_icon(self.icon_emoji.as_str()),
        )
    }

    /// The longer introduction posted the first time the bot ever runs.
    pub fn first_run_welcome(&self) -> OutboundResponse {
        OutboundResponse::new(
            self.greeting_channel.as_str(),
            format!(
                "Hello everyone ! My name is Baby Jay\n \
                 I can tell jokes, but very honest ones. \
                 Just say `Baby Jay` or `{}` to invoke me!",
                self.name
            ),
            PostOptions::as_user(),
        )
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify;
    use crate::identity::Identity;

    struct FixedText;

    impl TextSource for FixedText {
        fn next_text(&self) -> String {
            "knock knock".to_string()
        }
    }

    fn dispatcher() -> Dispatcher {
        Dispatcher::new("babyjaybot", "general", ":cat:", Arc::new(FixedText))
    }

    fn me() -> Identity {
        Identity {
            name: "babyjaybot".into(),
            resolved_user_id: Some("U000".into()),
        }
    }

    fn all_true() -> Classification {
        Classification {
            is_chat_message: true,
            is_channel_conversation: true,
            is_from_self: false,
            mentions_bot: true,
        }
    }

    #[test]
    fn test_replies_to_channel_mention() {
        let event = InboundEvent::message("is Jay here?", "C123", "U999");
        let facets = classify(&event, Some(&me()), "babyjaybot");

        let reply = dispatcher().decide(&event, &facets).unwrap();
        assert_eq!(reply.target_channel, "C123");
        assert_eq!(reply.text, "knock knock");
        assert!(reply.options.as_user);
        assert!(reply.options.icon_emoji.is_none());
    }

    #[test]
    fn test_self_loop_guard() {
        let event = InboundEvent::message("is Jay here?", "C123", "U000");
        let facets = classify(&event, Some(&me()), "babyjaybot");
        assert!(facets.is_from_self);
        assert!(dispatcher().decide(&event, &facets).is_none());
    }

    #[test]
    fn test_not_chat_message() {
        let event = InboundEvent::message("jay", "C123", "U999");
        let facets = Classification {
            is_chat_message: false,
            ..all_true()
        };
        assert!(dispatcher().decide(&event, &facets).is_none());
    }

    #[test]
    fn test_direct_message_is_ignored() {
        let event = InboundEvent::message("hey jay", "D123", "U999");
        let facets = classify(&event, Some(&me()), "babyjaybot");
        assert!(!facets.is_channel_conversation);
        assert!(dispatcher().decide(&event, &facets).is_none());
    }

    #[test]
    fn test_no_mention_is_ignored() {
        let event = InboundEvent::message("hello everyone", "C123", "U999");
        let facets = classify(&event, Some(&me()), "babyjaybot");
        assert!(dispatcher().decide(&event, &facets).is_none());
    }

    #[test]
    fn test_startup_greeting() {
        let greeting = dispatcher().startup_greeting();
        assert_eq!(greeting.target_channel, "general");
        assert!(greeting.text.contains("babyjaybot"));
        assert_eq!(greeting.options.icon_emoji.as_deref(), Some(":cat:"));
        assert!(!greeting.options.as_user);
    }

    #[test]
    fn test_first_run_welcome() {
        let welcome = dispatcher().first_run_welcome();
        assert_eq!(welcome.target_channel, "general");
        assert!(welcome.text.contains("Baby Jay"));
        assert!(welcome.text.contains("`babyjaybot`"));
        assert!(welcome.options.as_user);
        assert!(welcome.options.icon_emoji.is_none());
    }

    #[test]
    fn test_from_config_uses_jokes() {
        let bot = BotConfig {
            jokes: vec!["only joke".into()],
            ..BotConfig::default()
        };
        let dispatcher = Dispatcher::from_config(&bot);
        let event = InboundEvent::message("jay?", "C1", "U1");

        let reply = dispatcher.decide(&event, &all_true()).unwrap();
        assert_eq!(reply.text, "only joke");
        assert_eq!(dispatcher.name(), "babyjaybot");
    }
}
