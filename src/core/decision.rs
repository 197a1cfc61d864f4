//! The normalized result of parsing one model response
//!
//! Both response protocols (native tool-calling and structured JSON-in-text)
//! reduce to a `Decision`. Nothing downstream of the parser branches on
//! protocol again.

use serde_json::{Map, Value};

/// A capability invocation requested by the model
#[derive(Debug, Clone, PartialEq)]
pub struct ActionRequest {
    /// Name of the capability to invoke (exact, case-sensitive)
    pub name: String,
    /// Arguments for the capability
    pub args: Map<String, Value>,
    /// Whether the request is classified as destructive
    ///
    /// The structured protocol supplies this via the model's `edit` flag; the
    /// loop additionally ORs in the resolved capability's own classification.
    pub destructive: bool,
    /// Opaque token tying the observation back to a native tool call
    pub tool_call_id: Option<String>,
}

impl ActionRequest {
    /// Create a new action request
    pub fn new(name: impl Into<String>, args: Map<String, Value>) -> Self {
        Self {
            name: name.into(),
            args,
            destructive: false,
            tool_call_id: None,
        }
    }

    /// Mark the request as destructive
    pub fn destructive(mut self, destructive: bool) -> Self {
        self.destructive = destructive;
        self
    }

    /// Attach a native tool-call id
    pub fn with_tool_call_id(mut self, id: impl Into<String>) -> Self {
        self.tool_call_id = Some(id.into());
        self
    }
}

/// What the model decided to do in one round-trip
///
/// Exactly one variant is produced per parse.
#[derive(Debug, Clone, PartialEq)]
pub enum Decision {
    /// Free reasoning, not yet actionable
    Thought {
        /// The reasoning text
        text: String,
    },

    /// A capability invocation request
    Action(ActionRequest),

    /// Terminal result for the current user turn
    Answer {
        /// The answer text
        text: String,
    },

    /// The response could not be parsed or validated
    ///
    /// Fed back to the model as a corrective message and retried, bounded by
    /// the iteration budget.
    Malformed {
        /// The raw response body
        raw: String,
        /// Why parsing/validation failed
        reason: String,
    },
}

impl Decision {
    /// Create a malformed decision
    pub fn malformed(raw: impl Into<String>, reason: impl Into<String>) -> Self {
        Decision::Malformed {
            raw: raw.into(),
            reason: reason.into(),
        }
    }
}
