//! Input validation for message requests.
//!
//! Limits live in [`ValidationConfig`]; the rules in [`rules`] report every
//! offending field through [`FieldErrors`].

mod config;
mod errors;
pub mod rules;

pub use config::ValidationConfig;
pub use errors::{CONTENT_FIELD, FieldErrors, INACTIVE_MESSAGE, MESSAGE_FIELD, TITLE_FIELD};
pub use rules::{ValidatedFields, validate_fields};
