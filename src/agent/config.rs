//! Agent configuration
//!
//! Configuration options for an `Agent`. A config is also what gets
//! registered as a delegable entry, so it carries everything needed to spawn
//! the child: persona, protocol, permission mode, and its own registry.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::capabilities::CapabilityRegistry;
use crate::core::{AgentError, AgentResult};
use crate::permissions::PermissionMode;

/// Default number of model round-trips allowed per turn
pub const DEFAULT_MAX_ITERATIONS: usize = 6;

/// Which response protocol the agent speaks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Protocol {
    /// Provider-native tool calling with a final-answer sentinel
    Native,
    /// A JSON object in plain text with thought/action/answer fields
    Structured,
}

impl Default for Protocol {
    fn default() -> Self {
        Self::Structured
    }
}

/// Configuration for an agent
///
/// Use the builder pattern to configure:
///
/// ```ignore
/// let config = AgentConfig::new("researcher", "You research topics thoroughly.")
///     .with_description("Looks things up and reports back")
///     .with_protocol(Protocol::Native)
///     .with_permission_mode(PermissionMode::AutoUnlessDestructive)
///     .with_registry(registry);
/// ```
pub struct AgentConfig {
    /// Agent name, also the registration name when delegated to
    name: String,
    /// One-line description shown to a parent agent's model
    description: String,
    /// Persona and task framing rendered into the system instructions
    system: String,
    /// Response protocol
    protocol: Protocol,
    /// How actions are gated
    permission_mode: PermissionMode,
    /// Model round-trips allowed per turn
    max_iterations: usize,
    /// Everything this agent may act through
    registry: Arc<CapabilityRegistry>,
}

impl AgentConfig {
    /// Create a new configuration with a name and persona
    pub fn new(name: impl Into<String>, system: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            system: system.into(),
            protocol: Protocol::default(),
            permission_mode: PermissionMode::default(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            registry: Arc::new(CapabilityRegistry::new()),
        }
    }

    /// Set the description shown to a delegating parent
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the response protocol
    pub fn with_protocol(mut self, protocol: Protocol) -> Self {
        self.protocol = protocol;
        self
    }

    /// Set the permission mode
    pub fn with_permission_mode(mut self, mode: PermissionMode) -> Self {
        self.permission_mode = mode;
        self
    }

    /// Set the per-turn iteration budget
    pub fn with_max_iterations(mut self, max: usize) -> Self {
        self.max_iterations = max;
        self
    }

    /// Set the capability registry
    pub fn with_registry(mut self, registry: Arc<CapabilityRegistry>) -> Self {
        self.registry = registry;
        self
    }

    /// The agent's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The agent's description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The persona text
    pub fn system(&self) -> &str {
        &self.system
    }

    /// The response protocol
    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    /// The permission mode
    pub fn permission_mode(&self) -> PermissionMode {
        self.permission_mode
    }

    /// The per-turn iteration budget
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// The capability registry
    pub fn registry(&self) -> &Arc<CapabilityRegistry> {
        &self.registry
    }

    /// Check the configuration is usable
    pub fn validate(&self) -> AgentResult<()> {
        if self.name.trim().is_empty() {
            return Err(AgentError::InvalidConfig("agent name is empty".into()));
        }
        if self.max_iterations == 0 {
            return Err(AgentError::InvalidConfig(
                "max_iterations must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

impl std::fmt::Debug for AgentConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgentConfig")
            .field("name", &self.name)
            .field("protocol", &self.protocol)
            .field("permission_mode", &self.permission_mode)
            .field("max_iterations", &self.max_iterations)
            .field("registry", &self.registry.names())
            .finish()
    }
}
