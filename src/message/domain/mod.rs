//! Domain model for organization-scoped messages.
//!
//! Pure value types with no storage concerns: the message aggregate, its
//! identifiers, and the normalized title key that defines uniqueness.

mod ids;
mod message;
mod title;

pub use ids::{MessageId, OrganizationId};
pub use message::{Message, PersistedMessageData};
pub use title::TitleKey;
