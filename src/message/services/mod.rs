//! Application services for message management.

mod error;
mod messages;
mod requests;

pub use error::{MessageServiceError, MessageServiceResult};
pub use messages::MessageService;
pub use requests::{CreateMessageRequest, UpdateMessageRequest};
