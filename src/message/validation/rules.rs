//! Individual validation rules for message input.
//!
//! Rules are pure functions. [`validate_fields`] runs every rule and
//! collects all failures instead of stopping at the first one.

use super::{
    ValidationConfig,
    errors::{CONTENT_FIELD, FieldErrors, TITLE_FIELD},
};
use std::ops::RangeInclusive;

/// Title and content after trimming, ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedFields {
    /// Trimmed title.
    pub title: String,
    /// Trimmed content.
    pub content: String,
}

/// Checks that trimmed `value` has a character count within `range`.
///
/// # Errors
///
/// Returns the human-readable problem description when the length is out of
/// range.
///
/// # Examples
///
/// ```
/// use orgboard::message::validation::rules::validate_length;
///
/// assert!(validate_length("title", "  abc  ", &(3..=200)).is_ok());
/// assert!(validate_length("title", "ab", &(3..=200)).is_err());
/// ```
pub fn validate_length(
    field: &str,
    value: &str,
    range: &RangeInclusive<usize>,
) -> Result<(), String> {
    let length = value.trim().chars().count();
    if range.contains(&length) {
        return Ok(());
    }
    Err(format!(
        "{field} must be between {} and {} characters",
        range.start(),
        range.end()
    ))
}

/// Validates title and content together.
///
/// # Errors
///
/// Returns every failing field at once.
pub fn validate_fields(
    title: &str,
    content: &str,
    config: &ValidationConfig,
) -> Result<ValidatedFields, FieldErrors> {
    let mut errors = FieldErrors::new();

    if let Err(problem) = validate_length(TITLE_FIELD, title, &config.title_range()) {
        errors.push(TITLE_FIELD, problem);
    }

    if let Err(problem) = validate_length(CONTENT_FIELD, content, &config.content_range()) {
        errors.push(CONTENT_FIELD, problem);
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ValidatedFields {
        title: title.trim().to_owned(),
        content: content.trim().to_owned(),
    })
}
