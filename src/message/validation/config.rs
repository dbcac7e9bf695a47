//! Length limits applied to message fields.

use serde::Deserialize;
use std::ops::RangeInclusive;

/// Configuration for field validation.
///
/// Limits count Unicode scalar values of the trimmed text and are
/// inclusive at both ends. Missing fields fall back to the defaults when
/// deserialised.
///
/// # Examples
///
/// ```
/// use orgboard::message::validation::ValidationConfig;
///
/// let config = ValidationConfig::default();
/// assert_eq!(config.title_range(), 3..=200);
/// assert_eq!(config.content_range(), 10..=1000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Minimum title length in characters.
    pub title_min_chars: usize,
    /// Maximum title length in characters.
    pub title_max_chars: usize,
    /// Minimum content length in characters.
    pub content_min_chars: usize,
    /// Maximum content length in characters.
    pub content_max_chars: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            title_min_chars: 3,
            title_max_chars: 200,
            content_min_chars: 10,
            content_max_chars: 1000,
        }
    }
}

impl ValidationConfig {
    /// Creates a lenient configuration that only rejects blank fields.
    ///
    /// Upper bounds keep their default values.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            title_min_chars: 1,
            content_min_chars: 1,
            ..Self::default()
        }
    }

    /// Returns the accepted title length range.
    #[must_use]
    pub const fn title_range(&self) -> RangeInclusive<usize> {
        self.title_min_chars..=self.title_max_chars
    }

    /// Returns the accepted content length range.
    #[must_use]
    pub const fn content_range(&self) -> RangeInclusive<usize> {
        self.content_min_chars..=self.content_max_chars
    }
}
