//! Turn outcome types

/// How one user turn ended
///
/// `Answering` is non-terminal for the session: the caller may supply a
/// follow-up message, which starts a fresh turn with a reset iteration
/// counter. The other outcomes report why the loop stopped; none of them is a
/// process fault.
#[derive(Debug, Clone, PartialEq)]
pub enum TurnOutcome {
    /// The model produced a final answer for this turn
    Answering(String),

    /// The approver or policy denied a requested action
    Forbidden(String),

    /// The turn ended with an error (unknown capability, provider failure)
    Errored(String),

    /// The iteration budget was exhausted without an answer
    ///
    /// Recoverable: the caller may start a new turn.
    ExhaustedBudget,
}

impl TurnOutcome {
    /// Check if this outcome carries an answer
    pub fn is_answer(&self) -> bool {
        matches!(self, TurnOutcome::Answering(_))
    }

    /// Get the answer text, if any
    pub fn answer(&self) -> Option<&str> {
        match self {
            TurnOutcome::Answering(text) => Some(text.as_str()),
            _ => None,
        }
    }
}

impl std::fmt::Display for TurnOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnOutcome::Answering(text) => write!(f, "Answering: {}", text),
            TurnOutcome::Forbidden(reason) => write!(f, "Forbidden: {}", reason),
            TurnOutcome::Errored(detail) => write!(f, "Errored: {}", detail),
            TurnOutcome::ExhaustedBudget => write!(f, "Exhausted iteration budget"),
        }
    }
}
