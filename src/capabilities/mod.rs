//! Capabilities and the registry that resolves them

mod capability;
mod registry;

pub use capability::{Capability, InvocationOutput};
pub use registry::{CapabilityRegistry, Registered};
