//! Comment data model.
//!
//! A comment holds a weak reference to its hero: the relation is an
//! identifier only, with no ownership or cascading lifecycle effects.

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use uuid::Uuid;

use super::hero::HeroId;

/// Canonical wire and store rendering of a comment timestamp: RFC 3339 UTC
/// at microsecond precision, so lexicographic order on the rendered string
/// is chronological order.
#[must_use]
pub fn comment_timestamp(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Stable comment identifier, assigned at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommentId(Uuid);

impl CommentId {
    /// Generate a fresh random identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for CommentId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

/// Validation errors returned when constructing a [`CommentText`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentTextValidationError {
    /// Text is empty after trimming whitespace.
    Empty,
}

impl fmt::Display for CommentTextValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "comment text must not be empty"),
        }
    }
}

impl std::error::Error for CommentTextValidationError {}

/// Non-empty comment body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentText(String);

impl CommentText {
    /// Validate and construct a comment body.
    pub fn new(text: impl Into<String>) -> Result<Self, CommentTextValidationError> {
        let raw = text.into();
        if raw.trim().is_empty() {
            return Err(CommentTextValidationError::Empty);
        }
        Ok(Self(raw))
    }

    /// Borrow the body as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for CommentText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<CommentText> for String {
    fn from(value: CommentText) -> Self {
        value.0
    }
}

/// A persisted comment. Immutable after creation; never deleted in scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    /// Identifier assigned at creation.
    pub id: CommentId,
    /// Weak reference to the commented hero's external id.
    pub hero: HeroId,
    /// The comment body.
    pub text: CommentText,
    /// Creation instant; the sole sort key for comment listings.
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\n\t")]
    fn blank_text_is_rejected(#[case] raw: &str) {
        assert_eq!(
            CommentText::new(raw).expect_err("blank text"),
            CommentTextValidationError::Empty
        );
    }

    #[rstest]
    fn comment_id_round_trips_through_display() {
        let id = CommentId::random();
        let parsed = Uuid::parse_str(&id.to_string()).expect("uuid rendering");
        assert_eq!(CommentId::from(parsed), id);
    }

    #[rstest]
    fn text_keeps_interior_whitespace() {
        let text = CommentText::new("what a hero, honestly").expect("valid text");
        assert_eq!(text.as_str(), "what a hero, honestly");
    }
}
