//! Capability trait definition
//!
//! All invokable capabilities implement this trait to provide a consistent
//! interface.

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::llm::CapabilityManifest;

/// Result of invoking a capability
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvocationOutput {
    /// The output of the capability
    pub output: String,
    /// Whether the invocation resulted in an error
    pub is_error: bool,
}

impl InvocationOutput {
    /// Create a successful output
    pub fn success(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            is_error: false,
        }
    }

    /// Create an error output
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            output: message.into(),
            is_error: true,
        }
    }
}

/// Trait for capabilities the agent can invoke
#[async_trait]
pub trait Capability: Send + Sync {
    /// Get the name of this capability
    fn name(&self) -> &str;

    /// Get a description of this capability
    fn description(&self) -> &str;

    /// Get the JSON schema describing the accepted arguments
    fn parameters(&self) -> Value;

    /// Whether an invocation with these arguments mutates state
    ///
    /// Read-only by default; capabilities that write, delete, or execute
    /// override this.
    fn is_destructive(&self, _args: &Map<String, Value>) -> bool {
        false
    }

    /// Invoke the capability with validated arguments
    async fn invoke(&self, args: &Map<String, Value>) -> Result<InvocationOutput>;

    /// Build the manifest entry offered to tool-calling providers
    fn manifest(&self) -> CapabilityManifest {
        CapabilityManifest {
            name: self.name().to_string(),
            description: self.description().to_string(),
            parameters: self.parameters(),
        }
    }
}
