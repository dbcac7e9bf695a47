//! Request payloads accepted by [`super::MessageService`].

use serde::Deserialize;

/// Payload for creating a message.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateMessageRequest {
    /// Raw title as supplied by the caller.
    pub title: String,
    /// Raw content as supplied by the caller.
    pub content: String,
}

impl CreateMessageRequest {
    /// Creates a request from raw title and content.
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Payload for updating a message.
///
/// `is_active` defaults to `true`. Setting it to `false` applies the new
/// title and content and then freezes the message.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMessageRequest {
    /// Raw replacement title.
    pub title: String,
    /// Raw replacement content.
    pub content: String,
    /// Whether the message stays active after this update.
    #[serde(default = "stays_active")]
    pub is_active: bool,
}

const fn stays_active() -> bool {
    true
}

impl UpdateMessageRequest {
    /// Creates an update that keeps the message active.
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            is_active: true,
        }
    }

    /// Marks the update as the message's final one.
    #[must_use]
    pub const fn deactivating(mut self) -> Self {
        self.is_active = false;
        self
    }
}
