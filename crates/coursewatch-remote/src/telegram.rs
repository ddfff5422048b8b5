//! Telegram Bot API notifier.

use crate::http::{build_client, describe};
use coursewatch_core::errors::{ExError, Result, WatchError};
use coursewatch_core::notifier::Notifier;
use coursewatch_core::WatchConfig;
use coursewatch_core_types::Sensitive;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;

/// Longest text `sendMessage` accepts, in UTF-16 code units.
pub const MAX_MESSAGE_UNITS: usize = 4096;

/// Length as Telegram counts it: UTF-16 code units.
fn units(text: &str) -> usize {
    text.encode_utf16().count()
}

#[derive(Debug, Deserialize)]
struct BotReply {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

/// Decide whether a `sendMessage` reply means the message was accepted.
///
/// # Errors
///
/// `Delivery` for a non-2xx status or a body with `"ok": false`. Telegram's
/// `description` is carried into the message when present.
pub fn interpret_reply(channel: &str, status: u16, body: &str) -> Result<()> {
    let reply: Option<BotReply> = serde_json::from_str(body).ok();
    let accepted = (200..300).contains(&status) && reply.as_ref().map_or(true, |r| r.ok);
    if accepted {
        return Ok(());
    }
    let description = reply
        .and_then(|r| r.description)
        .unwrap_or_else(|| format!("HTTP {}", status));
    Err(WatchError::DeliveryRejected {
        channel: channel.to_string(),
        description,
    }
    .into())
}

/// Split `text` into chunks of at most `limit` UTF-16 code units, breaking
/// between lines where possible. A single over-long line is cut between
/// characters, never inside a surrogate pair.
pub fn split_message(text: &str, limit: usize) -> Vec<String> {
    let limit = limit.max(2);
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for line in text.split('\n') {
        let line_len = units(line);
        let needed = if current.is_empty() { line_len } else { line_len + 1 };
        if current_len + needed > limit && !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if line_len > limit {
            for c in line.chars() {
                if current_len + c.len_utf16() > limit {
                    chunks.push(std::mem::take(&mut current));
                    current_len = 0;
                }
                current.push(c);
                current_len += c.len_utf16();
            }
            continue;
        }
        if !current.is_empty() {
            current.push('\n');
            current_len += 1;
        }
        current.push_str(line);
        current_len += line_len;
    }
    if !current.is_empty() || chunks.is_empty() {
        chunks.push(current);
    }
    chunks
}

/// Posts reports through a bot's `sendMessage` method.
pub struct TelegramNotifier {
    client: Client,
    api_url: String,
    token: Sensitive<String>,
}

impl TelegramNotifier {
    /// # Errors
    ///
    /// `Internal` if the HTTP client cannot be built.
    pub fn new(
        api_url: impl Into<String>,
        token: Sensitive<String>,
        timeout: Duration,
    ) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout)?,
            api_url: api_url.into(),
            token,
        })
    }

    /// # Errors
    ///
    /// `Internal` if the HTTP client cannot be built.
    pub fn from_config(config: &WatchConfig) -> Result<Self> {
        Self::new(
            config.telegram_api_url.clone(),
            config.telegram_token.clone(),
            config.http_timeout,
        )
    }

    fn send_message(&self, channel: &str, text: &str) -> Result<()> {
        let url = format!(
            "{}/bot{}/sendMessage",
            self.api_url.trim_end_matches('/'),
            self.token.expose()
        );
        let failed = |e: reqwest::Error| -> ExError {
            WatchError::DeliveryFailed {
                channel: channel.to_string(),
                reason: describe(e),
            }
            .into()
        };
        let response = self
            .client
            .post(url)
            .form(&[("chat_id", channel), ("text", text)])
            .send()
            .map_err(failed)?;
        let status = response.status().as_u16();
        let body = response.text().map_err(failed)?;
        interpret_reply(channel, status, &body)
    }
}

impl Notifier for TelegramNotifier {
    fn deliver(&self, channel: &str, text: &str) -> Result<()> {
        let chunks = split_message(text, MAX_MESSAGE_UNITS);
        for (index, chunk) in chunks.iter().enumerate() {
            self.send_message(channel, chunk)?;
            tracing::debug!(channel, part = index + 1, parts = chunks.len(), "message sent");
        }
        Ok(())
    }
}
