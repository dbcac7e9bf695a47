//! Field-level validation error collection.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Field name used for title violations.
pub const TITLE_FIELD: &str = "title";
/// Field name used for content violations.
pub const CONTENT_FIELD: &str = "content";
/// Field name used for violations concerning the message as a whole.
pub const MESSAGE_FIELD: &str = "message";

/// Text reported when an inactive message receives an update.
pub const INACTIVE_MESSAGE: &str = "inactive messages cannot be updated";

/// Mapping from field name to the human-readable problems found in it.
///
/// Fields iterate in name order so serialised output is stable.
///
/// # Examples
///
/// ```
/// use orgboard::message::validation::FieldErrors;
///
/// let mut errors = FieldErrors::new();
/// errors.push("title", "title must be between 3 and 200 characters");
/// assert!(errors.contains("title"));
/// assert_eq!(errors.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    /// Creates an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Returns the error reported when an inactive message is updated.
    #[must_use]
    pub fn inactive_message() -> Self {
        let mut errors = Self::new();
        errors.push(MESSAGE_FIELD, INACTIVE_MESSAGE);
        errors
    }

    /// Records a problem with a field.
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    /// Returns the problems recorded for a field.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// Returns `true` if the field has at least one problem.
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Iterates over the offending field names.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Returns the number of offending fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no problems were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the collection, returning the underlying map.
    #[must_use]
    pub fn into_inner(self) -> BTreeMap<String, Vec<String>> {
        self.0
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self
            .0
            .iter()
            .map(|(field, messages)| format!("{field}: {}", messages.join(", ")))
            .collect::<Vec<_>>()
            .join("; ");
        f.write_str(&rendered)
    }
}
