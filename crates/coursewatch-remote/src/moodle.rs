//! Moodle guest-access activity source.
//!
//! 1. GET the course page; visitors get the guest enrolment form.
//! 2. POST the form back with the guest password; Moodle sets the session
//!    cookie and redirects to the course.
//! 3. Read the activity names off the course page. Getting the form back
//!    instead means the password was rejected.

use crate::extract::{self, GUEST_PASSWORD_FIELD};
use crate::http::{build_client, describe};
use coursewatch_core::errors::{ExError, Result, WatchError};
use coursewatch_core::source::ActivitySource;
use coursewatch_core::WatchConfig;
use coursewatch_core_types::Sensitive;
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::Url;
use std::time::Duration;

/// Course page URL under a Moodle root.
pub fn course_page_url(root_url: &str, course_id: &str) -> String {
    format!(
        "{}/course/view.php?id={}",
        root_url.trim_end_matches('/'),
        course_id
    )
}

fn transport(url: &str, err: reqwest::Error) -> ExError {
    WatchError::Transport {
        url: url.to_string(),
        reason: describe(err),
    }
    .into()
}

/// Page body together with the URL it was finally served from.
struct Page {
    url: Url,
    body: String,
}

/// Lists course activities through Moodle's guest access.
pub struct MoodleGuestSource {
    client: Client,
    root_url: String,
}

impl MoodleGuestSource {
    /// # Errors
    ///
    /// `Internal` if the HTTP client cannot be built.
    pub fn new(root_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout)?,
            root_url: root_url.into(),
        })
    }

    /// # Errors
    ///
    /// `Internal` if the HTTP client cannot be built.
    pub fn from_config(config: &WatchConfig) -> Result<Self> {
        Self::new(config.root_url.clone(), config.http_timeout)
    }

    fn send(&self, label: &str, request: RequestBuilder) -> Result<Page> {
        let response = request.send().map_err(|e| transport(label, e))?;
        let status = response.status();
        if !status.is_success() {
            return Err(WatchError::HttpStatus {
                url: label.to_string(),
                status: status.as_u16(),
            }
            .into());
        }
        let url = response.url().clone();
        let body = response.text().map_err(|e| transport(label, e))?;
        Ok(Page { url, body })
    }
}

impl ActivitySource for MoodleGuestSource {
    fn fetch(&self, course_id: &str, guest_pass: &Sensitive<String>) -> Result<Vec<String>> {
        let course_url = course_page_url(&self.root_url, course_id);
        let landing = self.send(&course_url, self.client.get(&course_url))?;
        tracing::debug!(url = %landing.url, bytes = landing.body.len(), "course landing page");

        let mut form = extract::find_login_form(&landing.body)?.ok_or_else(|| {
            ExError::from(WatchError::LoginFormMissing {
                url: course_url.clone(),
            })
        })?;
        let action = landing.url.join(&form.action).map_err(|e| {
            ExError::from(WatchError::Transport {
                url: form.action.clone(),
                reason: format!("bad form action: {}", e),
            })
        })?;
        form.set_field(GUEST_PASSWORD_FIELD, guest_pass.expose().as_str());

        let action_label = action.to_string();
        let course = self.send(
            &action_label,
            self.client.post(action).form(&form.fields),
        )?;
        tracing::debug!(url = %course.url, bytes = course.body.len(), "course page after guest login");

        // A wrong password gets the form again instead of an error status.
        if extract::find_login_form(&course.body)?.is_some_and(|f| f.is_guest_form()) {
            return Err(WatchError::GuestAccessDenied { url: course_url }.into());
        }

        let names = extract::activity_names(&course.body)?;
        tracing::info!(course_id, activities = names.len(), "activities fetched");
        Ok(names)
    }
}
