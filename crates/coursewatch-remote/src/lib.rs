//! coursewatch remote - the two network collaborators of a watch cycle
//!
//! - [`moodle::MoodleGuestSource`]: logs into a course as guest and lists its
//!   activities
//! - [`telegram::TelegramNotifier`]: posts a report to a Telegram chat
//!
//! Both use a blocking `reqwest` client; a run has nothing to overlap.

pub mod extract;
pub mod http;
pub mod moodle;
pub mod telegram;

pub use moodle::MoodleGuestSource;
pub use telegram::TelegramNotifier;
