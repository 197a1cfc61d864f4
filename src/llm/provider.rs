//! Model provider trait
//!
//! Abstracts the model-calling collaborator so that different backends can be
//! used interchangeably with the agent loop. Concrete SDK clients live
//! outside this crate; the loop only depends on this trait.

use anyhow::Result;

use crate::conversation::Message;

use super::types::{CapabilityManifest, ModelResponse};

/// Trait for model-calling collaborators
///
/// Implementations must accept both protocol shapes: when `manifest` is
/// present the capabilities are offered for native tool-calling; when it is
/// absent (structured-text protocol) the capability catalogue has already
/// been rendered into the system instructions and the model is expected to
/// reply with free text.
#[async_trait::async_trait]
pub trait ModelProvider: Send + Sync {
    /// Send the conversation and get the next assistant response
    async fn complete(
        &self,
        messages: &[Message],
        manifest: Option<&[CapabilityManifest]>,
    ) -> Result<ModelResponse>;
}
