//! Normalized title key used for per-organization uniqueness.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Case-folded, trimmed form of a message title.
///
/// Two titles collide within an organization exactly when their keys are
/// equal. Stored titles keep their original casing; only comparisons go
/// through the key.
///
/// Folding maps each character through its uppercase and then its lowercase
/// form, one character at a time. `str::to_lowercase` is not used because its
/// final-sigma rule makes the result depend on a letter's position.
///
/// # Examples
///
/// ```
/// use orgboard::message::domain::TitleKey;
///
/// assert_eq!(TitleKey::new("  Release Notes "), TitleKey::new("release notes"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TitleKey(String);

impl TitleKey {
    /// Builds the key for a raw title.
    #[must_use]
    pub fn new(title: &str) -> Self {
        Self(
            title
                .trim()
                .chars()
                .flat_map(char::to_uppercase)
                .flat_map(char::to_lowercase)
                .collect(),
        )
    }

    /// Returns the normalized key text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TitleKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TitleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
