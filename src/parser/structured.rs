//! Structured JSON-in-text protocol parser
//!
//! For providers without native function calling: the model is instructed to
//! reply with a single JSON object carrying optional `thought`, `action`, and
//! `answer` fields. Validation failures become `Malformed` decisions that the
//! loop feeds back to the model for self-correction.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::core::{ActionRequest, Decision};
use crate::llm::ModelResponse;

use super::ResponseParser;

/// Schema of a structured reply
#[derive(Debug, Deserialize)]
struct StructuredReply {
    #[serde(default)]
    thought: Option<Vec<String>>,
    #[serde(default)]
    action: Option<StructuredAction>,
    #[serde(default)]
    answer: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StructuredAction {
    name: String,
    #[serde(default)]
    args: Map<String, Value>,
    /// Model-supplied destructiveness flag (0 = read-only)
    #[serde(default)]
    edit: u8,
}

/// Parser for the structured JSON-in-text protocol
#[derive(Debug, Default)]
pub struct StructuredParser;

impl StructuredParser {
    /// Create a new structured parser
    pub fn new() -> Self {
        Self
    }

    /// Decode the leading JSON object, tolerating trailing prose
    fn decode_leading(body: &str) -> Result<Value, String> {
        let mut stream = serde_json::Deserializer::from_str(body.trim_start()).into_iter::<Value>();
        match stream.next() {
            Some(Ok(value)) if value.is_object() => Ok(value),
            Some(Ok(value)) => Err(format!(
                "expected a JSON object, got {}",
                json_type_name(&value)
            )),
            Some(Err(e)) => Err(format!("response is not valid JSON: {}", e)),
            None => Err("empty response".to_string()),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl ResponseParser for StructuredParser {
    fn parse(&self, response: &ModelResponse) -> Decision {
        let body = match response.content.as_deref() {
            Some(text) if !text.trim().is_empty() => text,
            _ => return Decision::malformed("", "empty response"),
        };

        let value = match Self::decode_leading(body) {
            Ok(value) => value,
            Err(reason) => return Decision::malformed(body, reason),
        };

        let reply: StructuredReply = match serde_json::from_value(value) {
            Ok(reply) => reply,
            Err(e) => {
                return Decision::malformed(body, format!("schema validation failed: {}", e))
            }
        };

        // Precedence is part of the contract: action > answer > thought.
        if let Some(action) = reply.action {
            return Decision::Action(
                ActionRequest::new(action.name, action.args).destructive(action.edit != 0),
            );
        }
        if let Some(answer) = reply.answer.filter(|a| !a.is_empty()) {
            return Decision::Answer { text: answer };
        }
        if let Some(thought) = reply.thought.filter(|t| !t.is_empty()) {
            return Decision::Thought {
                text: thought.join("\n"),
            };
        }

        Decision::malformed(body, "response contains no action, answer, or thought")
    }
}
