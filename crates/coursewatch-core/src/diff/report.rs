//! Plain-text report renderer.

use crate::diff::model::Edit;

/// Render one `"<+|-> <name>"` line per edit, joined by `\n`.
///
/// No trailing newline; an empty sequence renders as the empty string. The
/// result is the literal message body handed to the notifier.
pub fn render_report(edits: &[Edit]) -> String {
    edits
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
