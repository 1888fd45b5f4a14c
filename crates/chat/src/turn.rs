//! Chat turns and speaker attribution.

use serde::{Deserialize, Serialize};

/// One message in a conversation.
///
/// Turns are immutable once recorded: the gateway appends one when a user
/// message arrives and one when the completion resolves, and nothing edits
/// or reorders them afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Turn {
    /// Who produced the text.
    speaker: Speaker,
    /// The message content. May be empty.
    text: String,
    /// Set on the placeholder recorded when a completion fails.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    error: bool,
}

impl Turn {
    /// Create a user turn.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::User,
            text: text.into(),
            error: false,
        }
    }

    /// Create a model turn.
    pub fn model(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Model,
            text: text.into(),
            error: false,
        }
    }

    /// Create the placeholder model turn recorded when a completion fails.
    pub fn model_error(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Model,
            text: text.into(),
            error: true,
        }
    }

    /// Who produced this turn.
    pub fn speaker(&self) -> Speaker {
        self.speaker
    }

    /// The message content.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether this turn stands in for a failed completion.
    pub fn is_error(&self) -> bool {
        self.error
    }
}

/// The producer of a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    /// The human side of the conversation.
    User,
    /// The language-model side of the conversation.
    Model,
}

impl Speaker {
    /// Transcript line prefix used when rendering this speaker's turns.
    pub fn prefix(self) -> &'static str {
        match self {
            Self::User => "User: ",
            Self::Model => "Model: ",
        }
    }
}
