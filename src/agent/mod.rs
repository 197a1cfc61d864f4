//! Agent configuration and the loop that drives it

mod agent_loop;
mod config;

pub use agent_loop::Agent;
pub use config::{AgentConfig, Protocol, DEFAULT_MAX_ITERATIONS};
