//! Conversation state and bounded prompt assembly.
//!
//! A conversation is an append-only log of [`Turn`]s, one per message,
//! attributed to either the user or the model. [`PromptAssembler`] renders
//! a system preamble plus the most recent window of that log into a single
//! prompt string under a fixed length budget.

pub use history::ConversationHistory;
pub use prompt::{MAX_CONTEXT_LENGTH, PromptAssembler};
pub use turn::{Speaker, Turn};

mod history;
mod prompt;
mod turn;
