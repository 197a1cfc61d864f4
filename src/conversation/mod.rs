//! Conversation state and message types

#[allow(clippy::module_inception)]
mod conversation;
mod message;

pub use conversation::ConversationState;
pub use message::{Message, Role};
