//! Markup extraction for Moodle course pages.
//!
//! Everything that depends on Moodle's HTML lives here so a theme change
//! touches one file.

use coursewatch_core::errors::{ExError, ExErrorKind, Result};
use scraper::{ElementRef, Html, Selector};

/// Activity list items. Newer themes use `activity-wrapper`, older ones
/// `activity`; file resources additionally carry `resource`/`modtype_resource`.
const ACTIVITY_ITEMS: &str = "li.activity, li.activity-wrapper, li.resource, li.modtype_resource";
const ACTIVITY_NAME: &str = "span.instancename";
const LOGIN_FORM: &str = "form.mform";
const FORM_INPUT: &str = "input";

/// Name of the guest password input in Moodle's guest enrolment form.
pub const GUEST_PASSWORD_FIELD: &str = "guestpassword";

fn selector(css: &'static str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| {
        ExError::new(ExErrorKind::Internal)
            .with_op("parse_selector")
            .with_message(format!("invalid selector `{}`: {:?}", css, e))
    })
}

/// The guest access form shown on a course page to visitors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginForm {
    /// `action` attribute as written; may be relative
    pub action: String,
    /// Named inputs in document order; a repeated name keeps its last value
    pub fields: Vec<(String, String)>,
}

impl LoginForm {
    /// Whether this is the guest enrolment form (it asks for a guest password).
    pub fn is_guest_form(&self) -> bool {
        self.fields.iter().any(|(n, _)| n == GUEST_PASSWORD_FIELD)
    }

    /// Set a field, replacing an existing one of the same name in place.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| n == name) {
            Some(field) => field.1 = value,
            None => self.fields.push((name.to_string(), value)),
        }
    }
}

/// Find the first `form.mform` posted with `method="post"`.
///
/// Returns `Ok(None)` when the page has no such form (or it lacks an action).
///
/// # Errors
///
/// `Internal` only if a built-in selector fails to parse.
pub fn find_login_form(html: &str) -> Result<Option<LoginForm>> {
    let document = Html::parse_document(html);
    let form_sel = selector(LOGIN_FORM)?;
    let input_sel = selector(FORM_INPUT)?;

    let form = document.select(&form_sel).find(|form| {
        form.value()
            .attr("method")
            .is_some_and(|m| m.eq_ignore_ascii_case("post"))
    });
    let Some(form) = form else {
        return Ok(None);
    };
    let Some(action) = form.value().attr("action") else {
        return Ok(None);
    };

    let mut login = LoginForm {
        action: action.to_string(),
        fields: Vec::new(),
    };
    for input in form.select(&input_sel) {
        if let Some(name) = input.value().attr("name") {
            login.set_field(name, input.value().attr("value").unwrap_or_default());
        }
    }
    Ok(Some(login))
}

/// First non-blank text node under `element`, trimmed.
///
/// Moodle appends a hidden type label (`<span class="accesshide"> File</span>`)
/// after the name; taking the first text node leaves it out.
fn first_text(element: ElementRef<'_>) -> Option<String> {
    element
        .text()
        .map(str::trim)
        .find(|t| !t.is_empty())
        .map(str::to_string)
}

/// Activity names in page order.
///
/// Items without a name span (labels, section summaries) are skipped.
///
/// # Errors
///
/// `Internal` only if a built-in selector fails to parse.
pub fn activity_names(html: &str) -> Result<Vec<String>> {
    let document = Html::parse_document(html);
    let item_sel = selector(ACTIVITY_ITEMS)?;
    let name_sel = selector(ACTIVITY_NAME)?;

    Ok(document
        .select(&item_sel)
        .filter_map(|item| item.select(&name_sel).next())
        .filter_map(first_text)
        .collect())
}
