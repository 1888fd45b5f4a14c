//! Per-session conversation history.

use crate::Turn;

/// An ordered, append-only log of [`Turn`]s for one session.
///
/// Entries are chronological, oldest first, and nothing removes or
/// reorders them during a session's life. Length limits are a
/// render-time concern of the prompt assembler and never touch the
/// stored log.
#[derive(Debug, Clone, Default)]
pub struct ConversationHistory {
    turns: Vec<Turn>,
}

impl ConversationHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a user turn. Empty text is permitted.
    pub fn append_user(&mut self, text: impl Into<String>) {
        self.turns.push(Turn::user(text));
    }

    /// Append a model turn.
    pub fn append_model(&mut self, text: impl Into<String>) {
        self.turns.push(Turn::model(text));
    }

    /// Append the placeholder model turn for a failed completion.
    pub fn append_model_error(&mut self, text: impl Into<String>) {
        self.turns.push(Turn::model_error(text));
    }

    /// The turns recorded so far, oldest first.
    pub fn snapshot(&self) -> &[Turn] {
        &self.turns
    }

    /// Number of recorded turns.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Whether no turns have been recorded.
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
