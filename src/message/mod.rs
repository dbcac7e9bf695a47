//! Organization-scoped message store.
//!
//! Messages are short titled entries partitioned by organization. Titles are
//! unique per organization (case-insensitively), fields are length checked,
//! and a message that has been deactivated becomes read-only while staying
//! readable and deletable.
//!
//! # Architecture
//!
//! The module follows hexagonal architecture principles:
//!
//! - **Domain**: Pure value types ([`domain::Message`], [`domain::MessageId`], [`domain::OrganizationId`])
//! - **Ports**: The storage contract ([`ports::MessageRepository`])
//! - **Adapters**: Concrete storage ([`adapters::memory::InMemoryMessageRepository`])
//! - **Validation**: Field limits and error collection
//! - **Services**: Orchestration and the outcome taxonomy ([`services::MessageService`])
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use mockable::DefaultClock;
//! use orgboard::message::adapters::memory::InMemoryMessageRepository;
//! use orgboard::message::domain::OrganizationId;
//! use orgboard::message::services::{CreateMessageRequest, MessageService};
//!
//! # let runtime = tokio::runtime::Builder::new_current_thread()
//! #     .build()
//! #     .expect("runtime");
//! # runtime.block_on(async {
//! let service = MessageService::new(
//!     Arc::new(InMemoryMessageRepository::new()),
//!     Arc::new(DefaultClock),
//! );
//! let organization = OrganizationId::new();
//!
//! let created = service
//!     .create(
//!         organization,
//!         Some(CreateMessageRequest::new("Standup", "Daily sync moved to 10:00")),
//!     )
//!     .await
//!     .expect("valid message");
//! assert!(created.is_active());
//! # });
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
