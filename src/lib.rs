//! Orgboard: an organization-scoped message store.
//!
//! This crate keeps short titled messages partitioned by tenant and enforces
//! field validation, per-organization title uniqueness, and a one-way
//! activation flag, all safely under concurrent access.
//!
//! # Architecture
//!
//! Orgboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business types with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`message`]: Message domain, storage, validation, and services
//! - [`telemetry`]: Structured logging bootstrap

pub mod message;
pub mod telemetry;
