//! Shared world state for message lifecycle BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use orgboard::message::{
    adapters::memory::InMemoryMessageRepository,
    domain::{Message, OrganizationId},
    services::{MessageService, MessageServiceResult},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestMessageService = MessageService<InMemoryMessageRepository, DefaultClock>;

/// Scenario world for message lifecycle behaviour tests.
pub struct MessageWorld {
    pub service: TestMessageService,
    pub organizations: HashMap<String, OrganizationId>,
    pub current_message: Option<Message>,
    pub last_result: Option<MessageServiceResult<Message>>,
    pub last_deletion: Option<MessageServiceResult<()>>,
}

impl MessageWorld {
    /// Creates a world with no organizations and no messages.
    #[must_use]
    pub fn new() -> Self {
        let service = MessageService::new(
            Arc::new(InMemoryMessageRepository::new()),
            Arc::new(DefaultClock),
        );

        Self {
            service,
            organizations: HashMap::new(),
            current_message: None,
            last_result: None,
            last_deletion: None,
        }
    }

    /// Returns the ID registered for `name`, registering a new one if needed.
    pub fn organization(&mut self, name: &str) -> OrganizationId {
        *self
            .organizations
            .entry(name.to_owned())
            .or_insert_with(OrganizationId::new)
    }

    /// Records a create or update outcome, tracking the latest message.
    pub fn record(&mut self, result: MessageServiceResult<Message>) {
        if let Ok(ref message) = result {
            self.current_message = Some(message.clone());
        }
        self.last_result = Some(result);
    }

    /// Returns the message the scenario is working with.
    ///
    /// # Errors
    ///
    /// Returns an error when no message has been created yet.
    pub fn message(&self) -> Result<&Message, eyre::Report> {
        self.current_message
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing current message in scenario world"))
    }
}

impl Default for MessageWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> MessageWorld {
    MessageWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
