//! Agent error types

use thiserror::Error;

/// Errors that can occur while driving an agent
#[derive(Error, Debug)]
pub enum AgentError {
    /// The model requested a capability that was never registered
    #[error("{0} isn't registered")]
    UnknownCapability(String),

    /// A capability raised during execution
    #[error("capability '{capability}' failed: {detail}")]
    Invocation {
        /// Name of the capability that failed
        capability: String,
        /// Failure detail
        detail: String,
    },

    /// The model-calling collaborator itself failed
    #[error("model provider error: {0}")]
    Provider(String),

    /// Invalid agent configuration
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error (console input, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl AgentError {
    /// Create a generic error from a string
    pub fn other(msg: impl Into<String>) -> Self {
        AgentError::Other(msg.into())
    }

    /// Create an invocation error for a capability
    pub fn invocation(capability: impl Into<String>, detail: impl Into<String>) -> Self {
        AgentError::Invocation {
            capability: capability.into(),
            detail: detail.into(),
        }
    }
}

/// Result type alias for agent operations
pub type AgentResult<T> = Result<T, AgentError>;
