//! Native tool-call protocol parser
//!
//! For providers with first-class function calling: a tool call wins over any
//! text content; plain text is an answer when prefixed by the reserved
//! sentinel, otherwise a thought.

use serde_json::Value;

use crate::core::{ActionRequest, Decision};
use crate::llm::ModelResponse;

use super::{ResponseParser, FINAL_ANSWER};

/// Parser for the native tool-call protocol
#[derive(Debug, Default)]
pub struct NativeParser;

impl NativeParser {
    /// Create a new native parser
    pub fn new() -> Self {
        Self
    }
}

impl ResponseParser for NativeParser {
    fn parse(&self, response: &ModelResponse) -> Decision {
        // Only the first tool call is honored
        if let Some(call) = response.tool_calls.first() {
            let arguments = match &call.arguments {
                // Some providers ship arguments as a serialized object
                Value::String(raw) => match serde_json::from_str::<Value>(raw) {
                    Ok(decoded) => decoded,
                    Err(e) => {
                        return Decision::malformed(
                            raw.clone(),
                            format!("tool call arguments are not valid JSON: {}", e),
                        )
                    }
                },
                other => other.clone(),
            };

            let Some(args) = arguments.as_object() else {
                return Decision::malformed(
                    arguments.to_string(),
                    "tool call arguments must be a JSON object",
                );
            };

            let mut request = ActionRequest::new(&call.name, args.clone());
            if let Some(id) = &call.id {
                request = request.with_tool_call_id(id);
            }
            return Decision::Action(request);
        }

        match response.content.as_deref() {
            Some(text) if !text.trim().is_empty() => {
                if let Some(answer) = text.trim_start().strip_prefix(FINAL_ANSWER) {
                    Decision::Answer {
                        text: answer.trim().to_string(),
                    }
                } else {
                    Decision::Thought {
                        text: text.to_string(),
                    }
                }
            }
            _ => Decision::malformed("", "empty response"),
        }
    }
}
