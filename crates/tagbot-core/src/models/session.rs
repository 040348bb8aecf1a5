//! Per-conversation session record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who produced a transcript turn.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Bot,
}

/// One line of conversation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Turn {
    pub speaker: Speaker,
    pub text: String,
    pub at: DateTime<Utc>,
}

/// A single conversation's identity and transcript.
///
/// Sessions are independent of each other; running multiple conversations
/// only requires one `Session` (and one engine) per conversation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    /// Unique session identifier
    pub session_id: String,
    /// When the conversation started
    pub started_at: DateTime<Utc>,
    /// Ordered transcript of both sides of the conversation
    pub turns: Vec<Turn>,
}

impl Session {
    /// Start a fresh session with an empty transcript.
    pub fn new() -> Self {
        Self {
            session_id: Uuid::new_v4().to_string(),
            started_at: Utc::now(),
            turns: Vec::new(),
        }
    }

    /// Append a turn to the transcript.
    pub fn record(&mut self, speaker: Speaker, text: impl Into<String>) {
        self.turns.push(Turn {
            speaker,
            text: text.into(),
            at: Utc::now(),
        });
    }

    /// Serialize the session to pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_keeps_order() {
        let mut session = Session::new();
        session.record(Speaker::Bot, "hello");
        session.record(Speaker::User, "red eyes");
        session.record(Speaker::Bot, "advice");

        assert_eq!(session.turns.len(), 3);
        assert_eq!(session.turns[0].speaker, Speaker::Bot);
        assert_eq!(session.turns[1].text, "red eyes");
    }

    #[test]
    fn test_sessions_have_distinct_ids() {
        let a = Session::new();
        let b = Session::new();
        assert_ne!(a.session_id, b.session_id);
    }

    #[test]
    fn test_to_json_round_trip() {
        let mut session = Session::new();
        session.record(Speaker::User, "bloodshot eyes");

        let json = session.to_json().unwrap();
        let parsed: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, session);
    }
}
