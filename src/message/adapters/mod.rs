//! Adapter implementations for message ports.

pub mod memory;

pub use memory::InMemoryMessageRepository;
