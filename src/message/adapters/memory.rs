//! In-memory implementation of the `MessageRepository` port.
//!
//! A single [`RwLock`] guards the whole collection: lookups share the read
//! lock, every mutation takes the write lock. The guarded operations perform
//! their check and their write under one write guard, which is what keeps
//! titles unique when creates race each other.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::message::{
    domain::{Message, MessageId, OrganizationId, TitleKey},
    ports::repository::{MessageRepository, RepositoryError, RepositoryResult},
};

type MessageMap = HashMap<MessageId, Message>;

/// In-memory implementation of [`MessageRepository`].
///
/// Cloning the repository yields another handle to the same store.
///
/// # Example
///
/// ```
/// use orgboard::message::adapters::memory::InMemoryMessageRepository;
///
/// let repo = InMemoryMessageRepository::new();
/// assert!(repo.is_empty());
/// ```
#[derive(Debug, Default, Clone)]
pub struct InMemoryMessageRepository {
    messages: Arc<RwLock<MessageMap>>,
}

impl InMemoryMessageRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts the messages held for every organization combined.
    ///
    /// A poisoned store counts as empty here; the trait methods surface it
    /// as [`RepositoryError::Unavailable`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages
            .read()
            .map_or(0, |messages| messages.len())
    }

    /// Returns `true` if no messages are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> RepositoryResult<RwLockReadGuard<'_, MessageMap>> {
        self.messages
            .read()
            .map_err(|e| RepositoryError::unavailable(format!("lock poisoned: {e}")))
    }

    fn write(&self) -> RepositoryResult<RwLockWriteGuard<'_, MessageMap>> {
        self.messages
            .write()
            .map_err(|e| RepositoryError::unavailable(format!("lock poisoned: {e}")))
    }
}

/// Generates an identifier not yet present in the store.
fn fresh_id(messages: &MessageMap) -> MessageId {
    loop {
        let id = MessageId::new();
        if !messages.contains_key(&id) {
            return id;
        }
    }
}

/// Returns the organization's message with the given title key, skipping
/// `except` so a message never collides with itself.
///
/// When the unguarded writes have let duplicates in, the oldest message wins,
/// with ties going to the lowest id.
fn title_owner<'a>(
    messages: &'a MessageMap,
    organization_id: OrganizationId,
    key: &TitleKey,
    except: Option<MessageId>,
) -> Option<&'a Message> {
    messages
        .values()
        .filter(|m| {
            m.organization_id() == organization_id
                && Some(m.id()) != except
                && m.title_key() == *key
        })
        .min_by_key(|m| (m.created_at(), m.id()))
}

fn insert_new(messages: &mut MessageMap, message: Message) -> Message {
    let stored = message.with_id(fresh_id(messages));
    messages.insert(stored.id(), stored.clone());
    stored
}

#[async_trait]
impl MessageRepository for InMemoryMessageRepository {
    async fn find_by_id(
        &self,
        organization_id: OrganizationId,
        id: MessageId,
    ) -> RepositoryResult<Option<Message>> {
        let guard = self.read()?;
        Ok(guard
            .get(&id)
            .filter(|m| m.organization_id() == organization_id)
            .cloned())
    }

    async fn find_all_by_organization(
        &self,
        organization_id: OrganizationId,
    ) -> RepositoryResult<Vec<Message>> {
        let guard = self.read()?;

        let mut messages: Vec<Message> = guard
            .values()
            .filter(|m| m.organization_id() == organization_id)
            .cloned()
            .collect();

        messages.sort_by(|a, b| {
            b.created_at()
                .cmp(&a.created_at())
                .then_with(|| a.id().cmp(&b.id()))
        });

        Ok(messages)
    }

    async fn find_by_title(
        &self,
        organization_id: OrganizationId,
        title: &str,
    ) -> RepositoryResult<Option<Message>> {
        let guard = self.read()?;
        let key = TitleKey::new(title);
        Ok(title_owner(&guard, organization_id, &key, None).cloned())
    }

    async fn create(&self, message: Message) -> RepositoryResult<Message> {
        let mut guard = self.write()?;
        Ok(insert_new(&mut guard, message))
    }

    async fn create_unique(&self, message: Message) -> RepositoryResult<Message> {
        let mut guard = self.write()?;

        let key = message.title_key();
        if title_owner(&guard, message.organization_id(), &key, None).is_some() {
            return Err(RepositoryError::DuplicateTitle {
                organization_id: message.organization_id(),
                title: key,
            });
        }

        Ok(insert_new(&mut guard, message))
    }

    async fn update(&self, message: Message) -> RepositoryResult<Option<Message>> {
        let mut guard = self.write()?;

        if !guard.contains_key(&message.id()) {
            return Ok(None);
        }

        guard.insert(message.id(), message.clone());
        Ok(Some(message))
    }

    async fn update_active(&self, message: Message) -> RepositoryResult<Option<Message>> {
        let mut guard = self.write()?;

        let Some(current) = guard
            .get(&message.id())
            .filter(|m| m.organization_id() == message.organization_id())
        else {
            return Ok(None);
        };

        if !current.is_active() {
            return Err(RepositoryError::Inactive(message.id()));
        }

        let key = message.title_key();
        if title_owner(&guard, message.organization_id(), &key, Some(message.id())).is_some() {
            return Err(RepositoryError::DuplicateTitle {
                organization_id: message.organization_id(),
                title: key,
            });
        }

        guard.insert(message.id(), message.clone());
        Ok(Some(message))
    }

    async fn delete(
        &self,
        organization_id: OrganizationId,
        id: MessageId,
    ) -> RepositoryResult<bool> {
        let mut guard = self.write()?;

        let owned = guard
            .get(&id)
            .is_some_and(|m| m.organization_id() == organization_id);
        if !owned {
            return Ok(false);
        }

        Ok(guard.remove(&id).is_some())
    }
}
