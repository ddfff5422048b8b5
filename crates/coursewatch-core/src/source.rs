//! Activity source interface.
//!
//! The diff core never sees markup: whatever talks to the course platform
//! hands back the activity names in page order, or a `Fetch` error.

use crate::errors::Result;
use coursewatch_core_types::Sensitive;

/// Produces the current ordered list of activity names for a course.
pub trait ActivitySource {
    /// Fetch the activity names of `course_id`, in presentation order.
    ///
    /// # Errors
    ///
    /// `ExErrorKind::Fetch` for network, authentication and parse failures
    /// alike.
    fn fetch(&self, course_id: &str, guest_pass: &Sensitive<String>) -> Result<Vec<String>>;
}

/// In-memory source returning a fixed list, for tests.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    names: Vec<String>,
}

impl StaticSource {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }
}

impl ActivitySource for StaticSource {
    fn fetch(&self, _course_id: &str, _guest_pass: &Sensitive<String>) -> Result<Vec<String>> {
        Ok(self.names.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_source_returns_names_in_order() {
        let source = StaticSource::new(["Slides", "Quiz"]);
        let names = source
            .fetch("1", &Sensitive::new(String::new()))
            .unwrap();
        assert_eq!(names, vec!["Slides", "Quiz"]);
    }
}
