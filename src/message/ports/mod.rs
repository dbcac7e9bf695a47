//! Port contracts for the message store.
//!
//! Ports define infrastructure-agnostic interfaces used by message services.

pub mod repository;

pub use repository::{MessageRepository, RepositoryError, RepositoryResult};
