//! Shared HTTP client setup.

use coursewatch_core::errors::{ExError, ExErrorKind, Result};
use reqwest::blocking::Client;
use std::time::Duration;

const USER_AGENT: &str = concat!("coursewatch/", env!("CARGO_PKG_VERSION"));

/// Blocking client with a cookie jar, so a guest login carries over to the
/// following request.
///
/// # Errors
///
/// `Internal` if the TLS backend cannot be initialised.
pub fn build_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .cookie_store(true)
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| {
            ExError::new(ExErrorKind::Internal)
                .with_op("build_http_client")
                .with_message(e.to_string())
        })
}

/// Error text with its causes, minus the request URL.
///
/// Telegram URLs embed the bot token, so the URL is never part of the text.
pub fn describe(err: reqwest::Error) -> String {
    let err = err.without_url();
    let mut text = err.to_string();
    let mut source = std::error::Error::source(&err);
    while let Some(cause) = source {
        text.push_str(": ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    text
}
