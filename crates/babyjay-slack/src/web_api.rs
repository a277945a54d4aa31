//! Slack Web API client — the REST half of the transport.
//!
//! Every call authenticates with the bot token as a Bearer header and checks
//! Slack's `ok` flag; `ok: false` responses become errors carrying Slack's
//! `error` code.

use anyhow::Context;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use babyjay_core::config::schema::SlackConfig;
use babyjay_core::types::{Channel, PostOptions, RosterEntry};

// ─────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────

/// Page size for list endpoints.
const PAGE_LIMIT: &str = "200";

/// Maximum pages fetched from a list endpoint (50 × 200 = 10,000 entries).
const MAX_PAGES: usize = 50;

// ─────────────────────────────────────────────
// Response types
// ─────────────────────────────────────────────

/// Result of `rtm.connect`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RtmConnection {
    /// WebSocket URL to open.
    pub url: String,
    /// The authenticated bot user's id, when Slack reports it.
    pub self_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NamedEntry {
    id: String,
    #[serde(default)]
    name: String,
}

// ─────────────────────────────────────────────
// SlackWebApi
// ─────────────────────────────────────────────

/// Minimal Slack Web API client.
#[derive(Clone)]
pub struct SlackWebApi {
    http: reqwest::Client,
    api_base: String,
    token: String,
}

impl std::fmt::Debug for SlackWebApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlackWebApi")
            .field("api_base", &self.api_base)
            .field("token", &"<redacted>")
            .finish()
    }
}

impl SlackWebApi {
    pub fn new(config: &SlackConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: config.api_base.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        }
    }

    fn url(&self, method: &str) -> String {
        format!("{}/{}", self.api_base, method)
    }

    /// Check the `ok` flag of a Web API response body.
    fn check_ok(method: &str, body: Value) -> anyhow::Result<Value> {
        if body["ok"].as_bool() != Some(true) {
            let err = body["error"].as_str().unwrap_or("unknown");
            anyhow::bail!("{} failed: {}", method, err);
        }
        Ok(body)
    }

    /// POST with a JSON body.
    async fn post_json(&self, method: &str, body: &Value) -> anyhow::Result<Value> {
        let resp = self
            .http
            .post(self.url(method))
            .bearer_auth(&self.token)
            .json(body)
            .send()
            .await?;

        Self::check_ok(method, resp.json().await?)
    }

    /// GET with query parameters.
    async fn get(&self, method: &str, query: &[(&str, &str)]) -> anyhow::Result<Value> {
        let resp = self
            .http
            .get(self.url(method))
            .bearer_auth(&self.token)
            .query(query)
            .send()
            .await?;

        Self::check_ok(method, resp.json().await?)
    }

    /// Call `rtm.connect` to get a WebSocket URL for the real-time stream.
    pub async fn rtm_connect(&self) -> anyhow::Result<RtmConnection> {
        let body = self.get("rtm.connect", &[]).await?;

        let url = body["url"]
            .as_str()
            .ok_or_else(|| anyhow::anyhow!("no url in rtm.connect response"))?;

        Ok(RtmConnection {
            url: url.to_string(),
            self_id: body["self"]["id"].as_str().map(String::from),
        })
    }

    /// Fetch the workspace roster via `users.list`.
    pub async fn users_list(&self) -> anyhow::Result<Vec<RosterEntry>> {
        let members = self.list_all("users.list", "members", &[]).await?;
        Ok(members
            .into_iter()
            .map(|m| RosterEntry::new(m.id, m.name))
            .collect())
    }

    /// Fetch public and private channels via `conversations.list`.
    pub async fn conversations_list(&self) -> anyhow::Result<Vec<Channel>> {
        let channels = self
            .list_all(
                "conversations.list",
                "channels",
                &[
                    ("types", "public_channel,private_channel"),
                    ("exclude_archived", "true"),
                ],
            )
            .await?;
        Ok(channels
            .into_iter()
            .map(|c| Channel::new(c.id, c.name))
            .collect())
    }

    /// Walk a cursor-paginated list endpoint and collect `field` entries.
    async fn list_all(
        &self,
        method: &str,
        field: &str,
        params: &[(&str, &str)],
    ) -> anyhow::Result<Vec<NamedEntry>> {
        let mut entries = Vec::new();
        let mut cursor = String::new();

        for page in 0..MAX_PAGES {
            let body = {
                let mut query: Vec<(&str, &str)> = params.to_vec();
                query.push(("limit", PAGE_LIMIT));
                if !cursor.is_empty() {
                    query.push(("cursor", cursor.as_str()));
                }
                self.get(method, &query).await?
            };
            let items: Vec<NamedEntry> = match body.get(field) {
                Some(list) => serde_json::from_value(list.clone())
                    .with_context(|| format!("{} returned malformed {}", method, field))?,
                None => anyhow::bail!("no {} in {} response", field, method),
            };
            debug!(method, page, count = items.len(), "fetched page");
            entries.extend(items);

            cursor = body["response_metadata"]["next_cursor"]
                .as_str()
                .unwrap_or("")
                .to_string();
            if cursor.is_empty() {
                break;
            }
        }

        Ok(entries)
    }

    /// Send a message via `chat.postMessage`.
    ///
    /// `channel` must be a channel id. The formatting options are merged into
    /// the request body as-is (`icon_emoji`, `as_user`).
    pub async fn post_message(
        &self,
        channel: &str,
        text: &str,
        username: &str,
        options: &PostOptions,
    ) -> anyhow::Result<()> {
        let mut body = json!({
            "channel": channel,
            "text": text,
            "username": username,
        });

        if let (Some(target), Value::Object(extra)) =
            (body.as_object_mut(), serde_json::to_value(options)?)
        {
            target.extend(extra);
        }

        self.post_json("chat.postMessage", &body).await?;
        Ok(())
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
