//! Course catalog identifiers and progress.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`CourseId`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CourseIdError {
    /// The input string is empty.
    #[error("course id cannot be empty")]
    Empty,
    /// The input contains whitespace.
    #[error("course id cannot contain whitespace")]
    ContainsWhitespace,
}

/// A catalog item slug, e.g. `digital-literacy`.
///
/// The catalog itself is an external collaborator; carts and enrollment
/// records only carry these opaque identifiers. Slugs are folded to
/// lowercase so lookups are spelling-insensitive.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct CourseId(String);

impl CourseId {
    /// Parse a `CourseId` from a string, folding it to lowercase.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty or contains whitespace.
    pub fn parse(s: &str) -> Result<Self, CourseIdError> {
        if s.is_empty() {
            return Err(CourseIdError::Empty);
        }

        if s.chars().any(char::is_whitespace) {
            return Err(CourseIdError::ContainsWhitespace);
        }

        Ok(Self(s.to_lowercase()))
    }

    /// Returns the slug as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for CourseId {
    type Err = CourseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for CourseId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Completion percentage for an enrolled course, clamped to 0-100.
///
/// New enrollments start at [`Progress::ZERO`]; lesson-completion events
/// move it upward. Out-of-range inputs clamp rather than error because the
/// writers are external and a bad percentage should never poison a record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct Progress(u8);

impl Progress {
    /// No lessons completed.
    pub const ZERO: Self = Self(0);

    /// Course fully completed.
    pub const COMPLETE: Self = Self(100);

    /// Create a progress value, clamping to 100.
    #[must_use]
    pub const fn new(percent: u8) -> Self {
        if percent > 100 {
            Self(100)
        } else {
            Self(percent)
        }
    }

    /// The percentage as an integer in 0..=100.
    #[must_use]
    pub const fn percent(self) -> u8 {
        self.0
    }

    /// Whether the course has been fully completed.
    #[must_use]
    pub const fn is_complete(self) -> bool {
        self.0 == 100
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_course_id_valid() {
        let id = CourseId::parse("digital-literacy").unwrap();
        assert_eq!(id.as_str(), "digital-literacy");
    }

    #[test]
    fn test_course_id_folds_case() {
        assert_eq!(
            CourseId::parse("Digital-Literacy").unwrap(),
            CourseId::parse("digital-literacy").unwrap()
        );
    }

    #[test]
    fn test_course_id_rejects_empty_and_whitespace() {
        assert!(matches!(CourseId::parse(""), Err(CourseIdError::Empty)));
        assert!(matches!(
            CourseId::parse("digital literacy"),
            Err(CourseIdError::ContainsWhitespace)
        ));
    }

    #[test]
    fn test_progress_clamps() {
        assert_eq!(Progress::new(42).percent(), 42);
        assert_eq!(Progress::new(200).percent(), 100);
        assert!(Progress::new(100).is_complete());
        assert!(!Progress::ZERO.is_complete());
    }

    #[test]
    fn test_progress_display() {
        assert_eq!(Progress::new(30).to_string(), "30%");
    }
}
