//! Outcome taxonomy for message service operations.

use crate::message::{domain::MessageId, ports::RepositoryError, validation::FieldErrors};
use thiserror::Error;

/// Result type for message service operations.
pub type MessageServiceResult<T> = Result<T, MessageServiceError>;

/// Service-level failures.
///
/// `NotFound` deliberately covers both a missing message and a message owned
/// by another organization.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MessageServiceError {
    /// A required identifier or the request payload is missing.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// One or more fields failed validation.
    #[error("validation failed: {0}")]
    Validation(FieldErrors),

    /// The change would break title uniqueness within the organization.
    #[error("conflict: {0}")]
    Conflict(String),

    /// The message does not exist in the organization.
    #[error("message not found: {0}")]
    NotFound(MessageId),

    /// The repository could not complete the operation.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl MessageServiceError {
    /// Creates a bad request error.
    #[must_use]
    pub fn bad_request(reason: impl Into<String>) -> Self {
        Self::BadRequest(reason.into())
    }

    /// Creates a conflict error.
    #[must_use]
    pub fn conflict(reason: impl Into<String>) -> Self {
        Self::Conflict(reason.into())
    }

    /// Returns the field errors of a `Validation` failure.
    #[must_use]
    pub const fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }

    /// Returns `true` for failures caused by the caller's input.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        !matches!(self, Self::Repository(_))
    }

    /// Suggested HTTP status code for transport layers.
    ///
    /// # Examples
    ///
    /// ```
    /// use orgboard::message::services::MessageServiceError;
    ///
    /// assert_eq!(MessageServiceError::conflict("taken").status_hint(), 409);
    /// ```
    #[must_use]
    pub const fn status_hint(&self) -> u16 {
        match self {
            Self::BadRequest(_) => 400,
            Self::Validation(_) => 422,
            Self::Conflict(_) => 409,
            Self::NotFound(_) => 404,
            Self::Repository(_) => 500,
        }
    }
}
