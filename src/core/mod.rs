//! Core types for the agent loop
//!
//! This module provides the fundamental types used throughout the crate:
//! - `Decision` / `ActionRequest` - the normalized parse result
//! - `TurnOutcome` - how a user turn ended
//! - `TurnObserver` - surfacing hook for in-loop events
//! - `AgentError` - error types

pub mod decision;
pub mod error;
pub mod outcome;
pub mod output;

pub use decision::{ActionRequest, Decision};
pub use error::{AgentError, AgentResult};
pub use outcome::TurnOutcome;
pub use output::{NullObserver, TurnObserver};
