//! Conversation state
//!
//! An ordered, append-only message log. Each agent instance owns exactly one;
//! nothing is ever reordered, merged, or dropped.

use uuid::Uuid;

use super::message::{Message, Role};

/// Append-only conversation log owned by one agent
#[derive(Debug, Clone)]
pub struct ConversationState {
    id: Uuid,
    messages: Vec<Message>,
}

impl ConversationState {
    /// Create an empty conversation
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            messages: Vec::new(),
        }
    }

    /// Create a conversation seeded with system instructions
    pub fn with_system(instructions: impl Into<String>) -> Self {
        let mut conversation = Self::new();
        conversation.push(Message::system(instructions));
        conversation
    }

    /// Conversation id
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Append a message (insertion order is the only ordering guarantee)
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// All messages, in insertion order
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Number of messages
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Count messages with the given role
    pub fn count_role(&self, role: Role) -> usize {
        self.messages.iter().filter(|m| m.role == role).count()
    }

    /// The most recent message, if any
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }
}

impl Default for ConversationState {
    fn default() -> Self {
        Self::new()
    }
}
