//! Watcher configuration
//!
//! Loaded once from a TOML file at process start and passed by reference to
//! every component that needs a setting. Validation happens here, so a bad
//! file fails before any network request is made.
//!
//! ```toml
//! course_id = 1234
//! guest_pass = "letmein"
//! root_url = "https://moodle.example.edu"
//! telegram_token = "123456:ABC"
//! telegram_channel = "@course_updates"
//! save_file = "state/course-1234.txt"
//! ```

use crate::errors::{ExError, Result, WatchError};
use coursewatch_core_types::Sensitive;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Validated settings for one watch cycle
#[derive(Debug, Clone)]
pub struct WatchConfig {
    pub course_id: String,
    pub guest_pass: Sensitive<String>,
    /// Moodle base URL without trailing slash
    pub root_url: String,
    pub telegram_token: Sensitive<String>,
    pub telegram_channel: String,
    /// Snapshot file; already resolved against the config file's directory
    pub save_file: PathBuf,
    pub telegram_api_url: String,
    pub http_timeout: Duration,
}

/// Ids are often written as bare integers (`course_id = 42`, `telegram_channel = -100123`).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Integer(i64),
}

impl Scalar {
    fn into_text(self) -> String {
        match self {
            Scalar::Text(s) => s,
            Scalar::Integer(n) => n.to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    course_id: Option<Scalar>,
    guest_pass: Option<Sensitive<String>>,
    root_url: Option<String>,
    telegram_token: Option<Sensitive<String>>,
    telegram_channel: Option<Scalar>,
    save_file: Option<PathBuf>,
    telegram_api_url: Option<String>,
    http_timeout_secs: Option<u64>,
}

fn missing(key: &str) -> ExError {
    WatchError::MissingSetting {
        key: key.to_string(),
    }
    .into()
}

fn invalid(key: &str, reason: impl Into<String>) -> ExError {
    WatchError::InvalidSetting {
        key: key.to_string(),
        reason: reason.into(),
    }
    .into()
}

fn required_text(value: Option<String>, key: &str) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(missing(key)),
    }
}

fn required_secret(value: Option<Sensitive<String>>, key: &str) -> Result<Sensitive<String>> {
    match value {
        Some(v) if !v.is_blank() => Ok(v),
        _ => Err(missing(key)),
    }
}

fn http_url(value: String, key: &str) -> Result<String> {
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(value.trim_end_matches('/').to_string())
    } else {
        Err(invalid(key, format!("`{}` is not an http(s) URL", value)))
    }
}

impl WatchConfig {
    /// Read and validate a config file.
    ///
    /// # Errors
    ///
    /// `Config` kind when the file cannot be read, is not valid TOML, lacks a
    /// required key, or holds an invalid value.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            ExError::from(WatchError::ConfigUnreadable {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
        })?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
        Self::parse(&text, base_dir, path).map_err(|e| e.with_path(path))
    }

    /// Parse and validate TOML text. A relative `save_file` is joined onto
    /// `base_dir`.
    ///
    /// # Errors
    ///
    /// `Config` kind, as for [`WatchConfig::load`].
    pub fn from_toml_str(text: &str, base_dir: &Path) -> Result<Self> {
        Self::parse(text, base_dir, Path::new("<inline>"))
    }

    fn parse(text: &str, base_dir: &Path, origin: &Path) -> Result<Self> {
        let raw: RawConfig = toml::from_str(text).map_err(|e| {
            ExError::from(WatchError::ConfigMalformed {
                path: origin.to_path_buf(),
                reason: e.to_string().trim_end().to_string(),
            })
        })?;
        Self::validate(raw, base_dir)
    }

    fn validate(raw: RawConfig, base_dir: &Path) -> Result<Self> {
        // Checked in file order so the first complaint matches the first gap.
        let course_id = required_text(raw.course_id.map(Scalar::into_text), "course_id")?;
        let guest_pass = required_secret(raw.guest_pass, "guest_pass")?;
        let root_url = http_url(required_text(raw.root_url, "root_url")?, "root_url")?;
        let telegram_token = required_secret(raw.telegram_token, "telegram_token")?;
        let telegram_channel = required_text(
            raw.telegram_channel.map(Scalar::into_text),
            "telegram_channel",
        )?;
        let save_file = match raw.save_file {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => return Err(missing("save_file")),
        };
        let save_file = if save_file.is_relative() {
            base_dir.join(save_file)
        } else {
            save_file
        };

        let telegram_api_url = match raw.telegram_api_url {
            Some(url) => http_url(url, "telegram_api_url")?,
            None => DEFAULT_TELEGRAM_API_URL.to_string(),
        };
        let http_timeout = match raw.http_timeout_secs {
            Some(0) => return Err(invalid("http_timeout_secs", "must be greater than zero")),
            Some(secs) => Duration::from_secs(secs),
            None => Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        };

        Ok(Self {
            course_id,
            guest_pass,
            root_url,
            telegram_token,
            telegram_channel,
            save_file,
            telegram_api_url,
            http_timeout,
        })
    }
}
