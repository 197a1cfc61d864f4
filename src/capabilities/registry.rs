//! Capability registry
//!
//! The registry holds everything an agent may act through. Direct
//! capabilities and delegable agents live in the same namespace but stay
//! distinguishable, so the loop never has to guess which kind a name resolves
//! to.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::{json, Value};

use super::capability::Capability;
use crate::agent::AgentConfig;
use crate::core::{AgentError, AgentResult};
use crate::llm::CapabilityManifest;

/// A registered entry, tagged by how it executes
#[derive(Clone)]
pub enum Registered {
    /// A capability invoked directly
    Invoke(Arc<dyn Capability>),
    /// A child agent the work is delegated to
    Delegate(Arc<AgentConfig>),
}

impl std::fmt::Debug for Registered {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Registered::Invoke(c) => f.debug_tuple("Invoke").field(&c.name()).finish(),
            Registered::Delegate(c) => f.debug_tuple("Delegate").field(&c.name()).finish(),
        }
    }
}

impl Registered {
    /// The entry's registered name
    pub fn name(&self) -> &str {
        match self {
            Registered::Invoke(capability) => capability.name(),
            Registered::Delegate(config) => config.name(),
        }
    }

    fn description(&self) -> &str {
        match self {
            Registered::Invoke(capability) => capability.description(),
            Registered::Delegate(config) => config.description(),
        }
    }

    fn parameters(&self) -> Value {
        match self {
            Registered::Invoke(capability) => capability.parameters(),
            Registered::Delegate(_) => json!({
                "type": "object",
                "properties": {
                    "task": {
                        "type": "string",
                        "description": "The task to hand to this agent, phrased as a standalone request"
                    }
                },
                "required": ["task"]
            }),
        }
    }

    fn manifest(&self) -> CapabilityManifest {
        CapabilityManifest {
            name: self.name().to_string(),
            description: self.description().to_string(),
            parameters: self.parameters(),
        }
    }
}

/// Registry that holds all available capabilities and delegates
pub struct CapabilityRegistry {
    entries: HashMap<String, Registered>,
}

impl CapabilityRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register a capability
    pub fn register<C: Capability + 'static>(&mut self, capability: C) {
        let name = capability.name().to_string();
        tracing::info!("[CapabilityRegistry] Registering capability: {}", name);
        self.entries
            .insert(name, Registered::Invoke(Arc::new(capability)));
    }

    /// Register a shared capability
    pub fn register_shared(&mut self, capability: Arc<dyn Capability>) {
        let name = capability.name().to_string();
        tracing::info!("[CapabilityRegistry] Registering capability: {}", name);
        self.entries.insert(name, Registered::Invoke(capability));
    }

    /// Register a child agent as a delegable entry under its own name
    pub fn register_delegate(&mut self, config: Arc<AgentConfig>) {
        let name = config.name().to_string();
        tracing::info!("[CapabilityRegistry] Registering delegate agent: {}", name);
        self.entries.insert(name, Registered::Delegate(config));
    }

    /// Resolve a name, failing closed on anything unregistered
    pub fn resolve(&self, name: &str) -> AgentResult<&Registered> {
        self.entries
            .get(name)
            .ok_or_else(|| AgentError::UnknownCapability(name.to_string()))
    }

    /// Look up an entry without failing
    pub fn get(&self, name: &str) -> Option<&Registered> {
        self.entries.get(name)
    }

    /// Manifests for tool-calling providers, sorted for stable prompts
    pub fn manifest(&self) -> Vec<CapabilityManifest> {
        let mut manifests: Vec<_> = self.entries.values().map(|e| e.manifest()).collect();
        manifests.sort_by(|a, b| a.name.cmp(&b.name));
        manifests
    }

    /// Markdown catalogue rendered into structured-protocol instructions
    pub fn catalogue(&self) -> String {
        let mut sections = vec!["## Available Tools:\n".to_string()];

        let mut entries: Vec<_> = self.entries.values().collect();
        entries.sort_by(|a, b| a.name().cmp(b.name()));

        for entry in &entries {
            let params = parameter_names(&entry.parameters());
            let mut section = format!("### {}\n", entry.name());
            section += &format!("**Parameters**: {}\n\n", params.join(", "));
            section += &format!("**Description**: {}\n", entry.description());
            sections.push(section);
        }

        if entries.is_empty() {
            sections.push("### No tools are available".to_string());
        }

        sections.join("\n")
    }

    /// Names of all registered entries
    pub fn names(&self) -> Vec<&str> {
        self.entries.keys().map(|s| s.as_str()).collect()
    }

    /// Number of registered entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CapabilityRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn parameter_names(schema: &Value) -> Vec<String> {
    schema
        .get("properties")
        .and_then(Value::as_object)
        .map(|props| {
            let mut names: Vec<_> = props.keys().cloned().collect();
            names.sort();
            names
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capabilities::InvocationOutput;
    use async_trait::async_trait;
    use serde_json::Map;

    struct Probe;

    #[async_trait]
    impl Capability for Probe {
        fn name(&self) -> &str {
            "probe"
        }

        fn description(&self) -> &str {
            "Inspects the environment"
        }

        fn parameters(&self) -> Value {
            json!({
                "type": "object",
                "properties": {
                    "path": {"type": "string"},
                    "depth": {"type": "integer"}
                },
                "required": ["path"]
            })
        }

        async fn invoke(&self, _args: &Map<String, Value>) -> anyhow::Result<InvocationOutput> {
            Ok(InvocationOutput::success("ok"))
        }
    }

    #[test]
    fn test_empty_registry() {
        let registry = CapabilityRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.get("probe").is_none());
    }

    #[test]
    fn test_resolve_unknown_fails_closed() {
        let registry = CapabilityRegistry::new();
        let err = registry.resolve("run_shell").unwrap_err();
        assert_eq!(err.to_string(), "run_shell isn't registered");
    }

    #[test]
    fn test_resolve_registered_capability() {
        let mut registry = CapabilityRegistry::new();
        registry.register(Probe);

        assert!(matches!(
            registry.resolve("probe"),
            Ok(Registered::Invoke(_))
        ));
    }

    #[test]
    fn test_delegate_resolves_under_agent_name() {
        let mut registry = CapabilityRegistry::new();
        let config = Arc::new(
            AgentConfig::new("researcher", "You research things.")
                .with_description("Looks things up"),
        );
        registry.register_delegate(config);

        assert!(matches!(
            registry.resolve("researcher"),
            Ok(Registered::Delegate(_))
        ));
    }

    #[test]
    fn test_manifest_is_sorted() {
        let mut registry = CapabilityRegistry::new();
        registry.register(Probe);
        registry.register_delegate(Arc::new(AgentConfig::new("assistant", "Help out.")));

        let manifests = registry.manifest();
        let names: Vec<_> = manifests.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["assistant", "probe"]);
    }

    #[test]
    fn test_catalogue_lists_entries() {
        let mut registry = CapabilityRegistry::new();
        registry.register(Probe);

        let catalogue = registry.catalogue();
        assert!(catalogue.starts_with("## Available Tools:\n"));
        assert!(catalogue.contains("### probe\n"));
        assert!(catalogue.contains("**Parameters**: depth, path\n"));
        assert!(catalogue.contains("**Description**: Inspects the environment\n"));
    }

    #[test]
    fn test_empty_catalogue() {
        let registry = CapabilityRegistry::new();
        assert!(registry.catalogue().contains("### No tools are available"));
    }
}
