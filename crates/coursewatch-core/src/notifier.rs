//! Report delivery interface.

use crate::errors::Result;

/// Sends a rendered report to a messaging channel.
pub trait Notifier {
    /// Deliver `text` to `channel`.
    ///
    /// # Errors
    ///
    /// `ExErrorKind::Delivery` when the message was not accepted. The caller
    /// must not record the new state in that case.
    fn deliver(&self, channel: &str, text: &str) -> Result<()>;
}
