//! Unit tests for the message module.
//!
//! Tests are organised by layer, covering happy paths, error cases, and edge
//! cases for all public APIs.
