//! Service layer for organization-scoped message management.

use crate::message::{
    domain::{Message, MessageId, OrganizationId},
    ports::{MessageRepository, RepositoryError},
    services::{
        error::{MessageServiceError, MessageServiceResult},
        requests::{CreateMessageRequest, UpdateMessageRequest},
    },
    validation::{FieldErrors, ValidationConfig, validate_fields},
};
use mockable::Clock;
use std::sync::Arc;
use tracing::{debug, error, info, instrument};

const DUPLICATE_TITLE: &str = "a message with the same title already exists";
const MISSING_BODY: &str = "request body is required";

/// Message orchestration service.
///
/// Validates input, enforces the active-only mutation rule, and relies on the
/// repository's guarded writes for title uniqueness so that concurrent
/// callers cannot slip a duplicate in between a check and an insert.
#[derive(Clone)]
pub struct MessageService<R, C>
where
    R: MessageRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    config: ValidationConfig,
}

impl<R, C> MessageService<R, C>
where
    R: MessageRepository,
    C: Clock + Send + Sync,
{
    /// Creates a service with the default validation limits.
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self::with_config(repository, clock, ValidationConfig::default())
    }

    /// Creates a service with custom validation limits.
    #[must_use]
    pub const fn with_config(repository: Arc<R>, clock: Arc<C>, config: ValidationConfig) -> Self {
        Self {
            repository,
            clock,
            config,
        }
    }

    /// Returns the validation limits in use.
    #[must_use]
    pub const fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Creates a message in an organization.
    ///
    /// `request` is `None` when the caller supplied no payload.
    ///
    /// # Errors
    ///
    /// Returns [`MessageServiceError::BadRequest`] for a nil organization or a
    /// missing payload, [`MessageServiceError::Validation`] with every
    /// offending field, [`MessageServiceError::Conflict`] when the title is
    /// already used in the organization, or
    /// [`MessageServiceError::Repository`] when storage fails.
    #[instrument(skip_all, fields(organization_id = %organization_id))]
    pub async fn create(
        &self,
        organization_id: OrganizationId,
        request: Option<CreateMessageRequest>,
    ) -> MessageServiceResult<Message> {
        self.create_message(organization_id, request)
            .await
            .inspect(|message| info!(message_id = %message.id(), "message created"))
            .inspect_err(|err| log_failure("create", err))
    }

    /// Replaces the title and content of an active message.
    ///
    /// # Errors
    ///
    /// Returns [`MessageServiceError::BadRequest`] for nil identifiers or a
    /// missing payload, [`MessageServiceError::NotFound`] when the message
    /// does not exist in the organization, [`MessageServiceError::Validation`]
    /// when the message is inactive or fields are invalid,
    /// [`MessageServiceError::Conflict`] when the new title belongs to another
    /// message, or [`MessageServiceError::Repository`] when storage fails.
    #[instrument(skip_all, fields(organization_id = %organization_id, message_id = %id))]
    pub async fn update(
        &self,
        organization_id: OrganizationId,
        id: MessageId,
        request: Option<UpdateMessageRequest>,
    ) -> MessageServiceResult<Message> {
        self.update_message(organization_id, id, request)
            .await
            .inspect(|message| {
                info!(is_active = message.is_active(), "message updated");
            })
            .inspect_err(|err| log_failure("update", err))
    }

    /// Deletes a message. Inactive messages may be deleted too.
    ///
    /// # Errors
    ///
    /// Returns [`MessageServiceError::BadRequest`] for nil identifiers,
    /// [`MessageServiceError::NotFound`] when nothing was removed, or
    /// [`MessageServiceError::Repository`] when storage fails.
    #[instrument(skip_all, fields(organization_id = %organization_id, message_id = %id))]
    pub async fn delete(
        &self,
        organization_id: OrganizationId,
        id: MessageId,
    ) -> MessageServiceResult<()> {
        self.delete_message(organization_id, id)
            .await
            .inspect(|_| info!("message deleted"))
            .inspect_err(|err| log_failure("delete", err))
    }

    /// Retrieves a message of the organization.
    ///
    /// Returns `Ok(None)` when the message does not exist there.
    ///
    /// # Errors
    ///
    /// Returns [`MessageServiceError::Repository`] when storage fails.
    pub async fn get(
        &self,
        organization_id: OrganizationId,
        id: MessageId,
    ) -> MessageServiceResult<Option<Message>> {
        Ok(self.repository.find_by_id(organization_id, id).await?)
    }

    /// Lists the organization's messages, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`MessageServiceError::Repository`] when storage fails.
    pub async fn list(&self, organization_id: OrganizationId) -> MessageServiceResult<Vec<Message>> {
        Ok(self
            .repository
            .find_all_by_organization(organization_id)
            .await?)
    }

    async fn create_message(
        &self,
        organization_id: OrganizationId,
        request: Option<CreateMessageRequest>,
    ) -> MessageServiceResult<Message> {
        require_organization(organization_id)?;
        let Some(CreateMessageRequest { title, content }) = request else {
            return Err(MessageServiceError::bad_request(MISSING_BODY));
        };

        let fields = validate_fields(&title, &content, &self.config)
            .map_err(MessageServiceError::Validation)?;
        let message = Message::new(organization_id, fields.title, fields.content, &*self.clock);

        self.repository
            .create_unique(message)
            .await
            .map_err(map_write_error)
    }

    async fn update_message(
        &self,
        organization_id: OrganizationId,
        id: MessageId,
        request: Option<UpdateMessageRequest>,
    ) -> MessageServiceResult<Message> {
        require_organization(organization_id)?;
        require_message(id)?;
        let Some(UpdateMessageRequest {
            title,
            content,
            is_active,
        }) = request
        else {
            return Err(MessageServiceError::bad_request(MISSING_BODY));
        };

        let existing = self
            .repository
            .find_by_id(organization_id, id)
            .await?
            .ok_or(MessageServiceError::NotFound(id))?;

        // Inactivity wins over field problems.
        if !existing.is_active() {
            return Err(MessageServiceError::Validation(
                FieldErrors::inactive_message(),
            ));
        }

        let fields = validate_fields(&title, &content, &self.config)
            .map_err(MessageServiceError::Validation)?;
        let revised = existing.revise(fields.title, fields.content, is_active, &*self.clock);

        self.repository
            .update_active(revised)
            .await
            .map_err(map_write_error)?
            .ok_or(MessageServiceError::NotFound(id))
    }

    async fn delete_message(
        &self,
        organization_id: OrganizationId,
        id: MessageId,
    ) -> MessageServiceResult<()> {
        require_organization(organization_id)?;
        require_message(id)?;

        if self.repository.delete(organization_id, id).await? {
            Ok(())
        } else {
            Err(MessageServiceError::NotFound(id))
        }
    }
}

fn require_organization(organization_id: OrganizationId) -> MessageServiceResult<()> {
    if organization_id.is_nil() {
        return Err(MessageServiceError::bad_request(
            "organization id is required",
        ));
    }
    Ok(())
}

fn require_message(id: MessageId) -> MessageServiceResult<()> {
    if id.is_nil() {
        return Err(MessageServiceError::bad_request("message id is required"));
    }
    Ok(())
}

/// Translates the outcome of a guarded repository write.
fn map_write_error(err: RepositoryError) -> MessageServiceError {
    match err {
        RepositoryError::DuplicateTitle { .. } => MessageServiceError::conflict(DUPLICATE_TITLE),
        RepositoryError::Inactive(_) => {
            MessageServiceError::Validation(FieldErrors::inactive_message())
        }
        other @ RepositoryError::Unavailable(_) => MessageServiceError::Repository(other),
    }
}

fn log_failure(operation: &'static str, err: &MessageServiceError) {
    if err.is_client_error() {
        debug!(operation, error = %err, "message request rejected");
    } else {
        error!(operation, error = %err, "message store failure");
    }
}
