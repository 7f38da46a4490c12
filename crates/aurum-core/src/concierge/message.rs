//! Chat transcript types.

use serde::{Deserialize, Serialize};

/// Who spoke a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnRole {
    /// Message typed by the client.
    User,
    /// Reply from the concierge (or a fallback shown in its place).
    Assistant,
}

/// A single turn in the concierge conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: TurnRole,
    pub text: String,
    /// Timestamp when the turn was appended (RFC 3339 format).
    pub timestamp: String,
}

impl ChatTurn {
    pub fn new(role: TurnRole, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(TurnRole::User, text)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(TurnRole::Assistant, text)
    }
}

/// Append-only log of the conversation shown in the chat panel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTranscript {
    turns: Vec<ChatTurn>,
}

impl ChatTranscript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a transcript with the concierge's greeting.
    pub fn with_greeting(greeting: impl Into<String>) -> Self {
        let mut transcript = Self::new();
        transcript.push(ChatTurn::assistant(greeting));
        transcript
    }

    pub fn push(&mut self, turn: ChatTurn) {
        self.turns.push(turn);
    }

    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn last(&self) -> Option<&ChatTurn> {
        self.turns.last()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_is_first_assistant_turn() {
        let transcript = ChatTranscript::with_greeting("Welcome");
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript.turns()[0].role, TurnRole::Assistant);
        assert_eq!(transcript.turns()[0].text, "Welcome");
    }

    #[test]
    fn test_push_preserves_order() {
        let mut transcript = ChatTranscript::new();
        transcript.push(ChatTurn::user("hello"));
        transcript.push(ChatTurn::assistant("good evening"));

        let roles: Vec<TurnRole> = transcript.turns().iter().map(|t| t.role).collect();
        assert_eq!(roles, vec![TurnRole::User, TurnRole::Assistant]);
        assert_eq!(transcript.last().unwrap().text, "good evening");
    }
}
