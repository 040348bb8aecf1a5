//! Conversation state for the dialogue engine.

use serde::{Deserialize, Serialize};

/// Where a conversation currently stands.
///
/// A conversation starts in `Waiting` and moves through at most one
/// transition per user turn. `Identified` and `Failed` are terminal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ConversationState {
    /// No symptom information received yet
    Waiting,
    /// Walking the ordered leading-question sequence; the index is the
    /// question currently awaiting a yes/no answer
    AskingCommonSymptom(usize),
    /// A single profile has been selected; the index is the profile's
    /// position in the lexicon's declaration order
    Identified(usize),
    /// The question sequence was exhausted without an affirmative answer
    Failed,
}

impl ConversationState {
    /// Whether this state accepts no further transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ConversationState::Identified(_) | ConversationState::Failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_states() {
        assert!(!ConversationState::Waiting.is_terminal());
        assert!(!ConversationState::AskingCommonSymptom(3).is_terminal());
        assert!(ConversationState::Identified(0).is_terminal());
        assert!(ConversationState::Failed.is_terminal());
    }
}
