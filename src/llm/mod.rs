//! Model-calling collaborator interface
//!
//! Concrete provider clients (HTTP SDK wrappers, usage accounting) are not
//! part of this crate; callers bring a `ModelProvider` implementation.

mod provider;
mod types;

pub use provider::ModelProvider;
pub use types::{CapabilityManifest, ModelResponse, ToolCallRequest};
