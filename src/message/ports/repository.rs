//! Repository port for message persistence.
//!
//! Defines the storage contract the service layer depends on. Lookups are
//! always scoped by organization and report absence as `None`, never as an
//! error. The only errors are the two atomic guard outcomes and storage
//! unavailability.

use crate::message::domain::{Message, MessageId, OrganizationId, TitleKey};
use async_trait::async_trait;
use thiserror::Error;

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Port for message persistence operations.
///
/// # Implementation Notes
///
/// Implementations must ensure:
/// - Message IDs are unique across the whole store
/// - No lookup returns a message owned by another organization
/// - `create_unique` and `update_active` perform their check and their write
///   as one indivisible step with respect to every other write
/// - Concurrent readers never observe a partially written message
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Retrieves a message by identifier within an organization.
    ///
    /// Returns `None` when the message does not exist or belongs to a
    /// different organization.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Unavailable`] if the store cannot be read.
    async fn find_by_id(
        &self,
        organization_id: OrganizationId,
        id: MessageId,
    ) -> RepositoryResult<Option<Message>>;

    /// Retrieves every message of an organization, newest first.
    ///
    /// Messages sharing a creation timestamp are ordered by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Unavailable`] if the store cannot be read.
    async fn find_all_by_organization(
        &self,
        organization_id: OrganizationId,
    ) -> RepositoryResult<Vec<Message>>;

    /// Finds the message whose title matches case-insensitively after
    /// trimming.
    ///
    /// If several match, the oldest is returned, ties going to the lowest id.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Unavailable`] if the store cannot be read.
    async fn find_by_title(
        &self,
        organization_id: OrganizationId,
        title: &str,
    ) -> RepositoryResult<Option<Message>>;

    /// Stores a message under a freshly generated identifier.
    ///
    /// Any identifier carried by `message` is replaced. Performs no
    /// uniqueness checks.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Unavailable`] if the store cannot be written.
    async fn create(&self, message: Message) -> RepositoryResult<Message>;

    /// Stores a message unless its organization already has the same title.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::DuplicateTitle`] when the title key is taken
    /// (nothing is stored), or [`RepositoryError::Unavailable`] if the store
    /// cannot be written.
    async fn create_unique(&self, message: Message) -> RepositoryResult<Message>;

    /// Replaces the stored record with the same identifier.
    ///
    /// Returns `None` and changes nothing when no such record exists. Does not
    /// check organization ownership.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Unavailable`] if the store cannot be written.
    async fn update(&self, message: Message) -> RepositoryResult<Option<Message>>;

    /// Replaces an active record owned by the message's organization.
    ///
    /// Returns `None` when no record with that identifier exists in the
    /// organization.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Inactive`] when the stored record no longer
    /// accepts updates, [`RepositoryError::DuplicateTitle`] when another
    /// message of the organization owns the new title, or
    /// [`RepositoryError::Unavailable`] if the store cannot be written.
    async fn update_active(&self, message: Message) -> RepositoryResult<Option<Message>>;

    /// Removes a message owned by the organization.
    ///
    /// Returns whether a record was removed.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Unavailable`] if the store cannot be written.
    async fn delete(
        &self,
        organization_id: OrganizationId,
        id: MessageId,
    ) -> RepositoryResult<bool>;
}

/// Errors returned by message repository implementations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RepositoryError {
    /// Another message of the organization already owns the title.
    #[error("title '{title}' already exists in organization {organization_id}")]
    DuplicateTitle {
        /// Organization in which the collision occurred.
        organization_id: OrganizationId,
        /// Normalized title that collided.
        title: TitleKey,
    },

    /// The stored message is inactive and cannot be replaced.
    #[error("message {0} is inactive")]
    Inactive(MessageId),

    /// The backing store cannot be accessed.
    #[error("message store unavailable: {0}")]
    Unavailable(String),
}

impl RepositoryError {
    /// Creates an unavailability error.
    #[must_use]
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable(reason.into())
    }
}
