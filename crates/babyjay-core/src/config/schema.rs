//! Configuration schema.
//!
//! Hierarchy: `Config` → `BotConfig`, `SlackConfig`, `StorageConfig`.
//!
//! JSON on disk uses **camelCase** keys; Rust uses snake_case.
//! We use `#[serde(rename_all = "camelCase")]` to handle the conversion.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils;

/// Default bot display name.
pub const DEFAULT_BOT_NAME: &str = "babyjaybot";

/// Default database location, relative to the working directory.
pub const DEFAULT_DB_PATH: &str = "data/babyjaybot.db";

/// Default Slack Web API base URL.
pub const DEFAULT_SLACK_API_BASE: &str = "https://slack.com/api";

// ─────────────────────────────────────────────
// Errors
// ─────────────────────────────────────────────

/// A config that loaded fine but cannot be used to start the bot.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no Slack token configured (set BOT_API_KEY or slack.token)")]
    MissingToken,
    #[error("bot name must not be empty")]
    EmptyName,
}

// ─────────────────────────────────────────────
// Root Config
// ─────────────────────────────────────────────

/// Root configuration — loaded from `~/.babyjaybot/config.json` + env vars.
///
/// Built once at startup and shared read-only (`Arc<Config>`) afterwards.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub bot: BotConfig,
    pub slack: SlackConfig,
    pub storage: StorageConfig,
}

impl Config {
    /// Check the settings the bot cannot start without.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.slack.token.trim().is_empty() {
            return Err(ConfigError::MissingToken);
        }
        if self.bot.name.trim().is_empty() {
            return Err(ConfigError::EmptyName);
        }
        Ok(())
    }

    /// Database path with `~` expanded.
    pub fn db_path(&self) -> PathBuf {
        utils::expand_home(&self.storage.db_path)
    }
}

// ─────────────────────────────────────────────
// Bot
// ─────────────────────────────────────────────

/// Persona settings: who the bot is and what it says.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BotConfig {
    /// Display name; also how the bot finds itself in the roster.
    pub name: String,
    /// Channel name that receives the startup greeting and welcome.
    pub greeting_channel: String,
    /// Emoji icon used for the startup greeting.
    pub icon_emoji: String,
    /// Replies handed out round-robin when the bot is mentioned.
    pub jokes: Vec<String>,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_BOT_NAME.to_string(),
            greeting_channel: "general".to_string(),
            icon_emoji: ":cat:".to_string(),
            jokes: default_jokes(),
        }
    }
}

fn default_jokes() -> Vec<String> {
    [
        "I told my crib a joke. It didn't laugh, but it did rock.",
        "Why do babies hate gossip? Too many rattles.",
        "I'm not crying, I'm just running my build in verbose mode.",
        "My bedtime is a suggestion. Like a compiler warning.",
        "Nap, snack, merge request. In that order.",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

// ─────────────────────────────────────────────
// Slack
// ─────────────────────────────────────────────

/// Slack connection settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SlackConfig {
    /// Bot token (`xoxb-...`). Required.
    pub token: String,
    /// Web API base URL (override for testing).
    pub api_base: String,
}

impl Default for SlackConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            api_base: DEFAULT_SLACK_API_BASE.to_string(),
        }
    }
}

impl SlackConfig {
    /// Whether a token is set.
    pub fn is_configured(&self) -> bool {
        !self.token.is_empty()
    }

    /// Token with everything but a short prefix hidden, for display.
    pub fn masked_token(&self) -> String {
        if self.token.is_empty() {
            return String::new();
        }
        let prefix: String = self.token.chars().take(5).collect();
        format!("{}…", prefix)
    }
}

// ─────────────────────────────────────────────
// Storage
// ─────────────────────────────────────────────

/// SQLite storage settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StorageConfig {
    /// Path of the database file. It must already exist at startup.
    pub db_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_path: DEFAULT_DB_PATH.to_string(),
        }
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
