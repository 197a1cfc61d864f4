use serde::{Deserialize, Serialize};

/// Role of a message sender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System instructions
    System,
    /// The human (also used for corrective retry messages and structured-mode
    /// observations)
    User,
    /// The model
    Assistant,
    /// A capability observation tied to a native tool call
    #[serde(rename = "tool")]
    ToolResult,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::System => write!(f, "system"),
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
            Role::ToolResult => write!(f, "tool"),
        }
    }
}

/// One entry in the conversation log
///
/// Messages are immutable once appended.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    /// Opaque token linking a tool-role observation to the native tool call
    /// that produced it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
}

impl Message {
    /// Create a new system message
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
            tool_call_id: None,
        }
    }

    /// Create a new user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            tool_call_id: None,
        }
    }

    /// Create a new assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            tool_call_id: None,
        }
    }

    /// Create a tool-result message, optionally tied to a tool call id
    pub fn tool_result(content: impl Into<String>, tool_call_id: Option<String>) -> Self {
        Self {
            role: Role::ToolResult,
            content: content.into(),
            tool_call_id,
        }
    }
}
