//! Raw model response types
//!
//! These are the two abstract shapes a model-calling collaborator may return:
//! free text, or a native tool-call payload. Provider-specific wire formats
//! are translated into these by the collaborator.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A native tool-call request extracted from a model response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCallRequest {
    /// Opaque call id, echoed back on the observation message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Requested capability name
    pub name: String,

    /// Arguments - either a JSON object or a serialized object string,
    /// depending on the provider
    pub arguments: Value,
}

impl ToolCallRequest {
    /// Create a new tool-call request
    pub fn new(id: Option<String>, name: impl Into<String>, arguments: Value) -> Self {
        Self {
            id,
            name: name.into(),
            arguments,
        }
    }
}

/// Raw assistant response from the model-calling collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelResponse {
    /// Text content, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Native tool-call requests, if any
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tool_calls: Vec<ToolCallRequest>,
}

impl ModelResponse {
    /// Create a text-only response
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            tool_calls: Vec::new(),
        }
    }

    /// Create a response carrying a single tool call
    pub fn tool_call(id: Option<String>, name: impl Into<String>, arguments: Value) -> Self {
        Self {
            content: None,
            tool_calls: vec![ToolCallRequest::new(id, name, arguments)],
        }
    }

    /// Create an empty response (no content, no tool calls)
    pub fn empty() -> Self {
        Self {
            content: None,
            tool_calls: Vec::new(),
        }
    }

    /// Render the response verbatim for the conversation audit trail
    pub fn audit_text(&self) -> String {
        if self.tool_calls.is_empty() {
            return self.content.clone().unwrap_or_default();
        }
        serde_json::to_string(self).unwrap_or_else(|e| format!("<unserializable response: {}>", e))
    }
}

/// Capability description handed to the model for native tool-calling
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapabilityManifest {
    /// Capability name
    pub name: String,
    /// What the capability does
    pub description: String,
    /// JSON Schema for the arguments
    pub parameters: Value,
}
