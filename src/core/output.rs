//! Surfacing hooks for in-loop events
//!
//! Thoughts and observations are surfaced to the caller as they happen; the
//! turn outcome only carries the terminal result.

/// Receives in-loop events as the agent iterates
pub trait TurnObserver: Send + Sync {
    /// The model produced free reasoning
    fn on_thought(&self, _text: &str) {}

    /// A capability produced an observation (or an invocation error)
    fn on_observation(&self, _capability: &str, _output: &str, _is_error: bool) {}

    /// An approved action is about to be invoked
    fn on_action(&self, _capability: &str) {}
}

/// Observer that discards all events
#[derive(Debug, Default)]
pub struct NullObserver;

impl TurnObserver for NullObserver {}
