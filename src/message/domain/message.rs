//! Message aggregate.

use super::{MessageId, OrganizationId, TitleKey};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A short titled text entry owned by one organization.
///
/// Messages are values: the repository hands out clones and every change is
/// expressed by building a new value and routing it back through the
/// repository. A message starts active; once inactive it only accepts
/// deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    id: MessageId,
    organization_id: OrganizationId,
    title: String,
    content: String,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
    is_active: bool,
}

/// Parameter object for reconstructing a message from storage or fixtures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedMessageData {
    /// Stored identifier.
    pub id: MessageId,
    /// Owning organization.
    pub organization_id: OrganizationId,
    /// Stored title.
    pub title: String,
    /// Stored content.
    pub content: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Timestamp of the latest update, if any.
    pub updated_at: Option<DateTime<Utc>>,
    /// Whether the message still accepts updates.
    pub is_active: bool,
}

impl Message {
    /// Creates a new active message stamped with the current clock time.
    ///
    /// The identifier is provisional; repositories assign the stored one.
    /// Callers are expected to pass already validated, trimmed text.
    #[must_use]
    pub fn new(
        organization_id: OrganizationId,
        title: impl Into<String>,
        content: impl Into<String>,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: MessageId::new(),
            organization_id,
            title: title.into(),
            content: content.into(),
            created_at: clock.utc(),
            updated_at: None,
            is_active: true,
        }
    }

    /// Reconstructs a message from persisted data.
    #[must_use]
    pub fn from_persisted(data: PersistedMessageData) -> Self {
        Self {
            id: data.id,
            organization_id: data.organization_id,
            title: data.title,
            content: data.content,
            created_at: data.created_at,
            updated_at: data.updated_at,
            is_active: data.is_active,
        }
    }

    /// Returns a copy of this message carrying the given identifier.
    #[must_use]
    pub fn with_id(self, id: MessageId) -> Self {
        Self { id, ..self }
    }

    /// Returns the revised message produced by an update.
    ///
    /// Title and content are replaced wholesale and `updated_at` is stamped.
    /// Passing `keep_active = false` freezes the revised message; an inactive
    /// message is never reactivated.
    #[must_use]
    pub fn revise(
        &self,
        title: impl Into<String>,
        content: impl Into<String>,
        keep_active: bool,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: self.id,
            organization_id: self.organization_id,
            title: title.into(),
            content: content.into(),
            created_at: self.created_at,
            updated_at: Some(clock.utc()),
            is_active: self.is_active && keep_active,
        }
    }

    /// Returns the message identifier.
    #[must_use]
    pub const fn id(&self) -> MessageId {
        self.id
    }

    /// Returns the owning organization.
    #[must_use]
    pub const fn organization_id(&self) -> OrganizationId {
        self.organization_id
    }

    /// Returns the title with its original casing.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the uniqueness key derived from the title.
    #[must_use]
    pub fn title_key(&self) -> TitleKey {
        TitleKey::new(&self.title)
    }

    /// Returns the message body.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the timestamp of the latest update, if any.
    #[must_use]
    pub const fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Returns `true` while the message accepts updates.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.is_active
    }
}
