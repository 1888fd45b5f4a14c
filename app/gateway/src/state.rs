//! Shared application state for the gateway server.

use crate::session::SessionStore;
use chat::PromptAssembler;
use compact_str::CompactString;
use llm::Completion;
use std::sync::Arc;

/// Shared state available to all request handlers.
pub struct AppState<C: Completion> {
    /// Prompt assembler holding the system preamble (immutable after init).
    pub assembler: Arc<PromptAssembler>,
    /// Session store.
    pub sessions: Arc<SessionStore>,
    /// Completion provider.
    pub provider: C,
    /// Model identifier passed to the provider.
    pub model: CompactString,
}

impl<C: Completion> Clone for AppState<C> {
    fn clone(&self) -> Self {
        Self {
            assembler: Arc::clone(&self.assembler),
            sessions: Arc::clone(&self.sessions),
            provider: self.provider.clone(),
            model: self.model.clone(),
        }
    }
}
