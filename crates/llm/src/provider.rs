//! Provider abstraction for the completion gateway.

use anyhow::Result;

/// A completion provider: maps an assembled prompt to generated text.
///
/// One attempt per call; retry policy, if any, belongs to callers. The
/// returned future is the only suspension point of an exchange, so a
/// caller holding a conversation lock across it serializes that
/// conversation's exchanges.
pub trait Completion: Clone + Send + Sync {
    /// Execute `prompt` against `model` and return the reply text.
    fn complete(&self, model: &str, prompt: &str) -> impl Future<Output = Result<String>> + Send;
}
