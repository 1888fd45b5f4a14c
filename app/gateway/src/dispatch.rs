//! Submission dispatch: one user message in, one model reply out.

use crate::{session::Session, state::AppState};
use chat::Turn;
use llm::Completion;

/// Text recorded as the model's turn when the completion service fails.
/// The turn carries an error flag alongside it.
pub const COMPLETION_ERROR_TEXT: &str = "Error generating content";

/// Run one submission against a session and return the updated
/// transcript.
///
/// Appends the user turn, renders the bounded prompt from the updated
/// history, executes the completion, and appends the reply. A gateway
/// failure is absorbed here: the error is logged and a flagged
/// placeholder turn takes the reply's place, leaving the conversation
/// usable for the next submission.
///
/// The session's history lock is held for the whole exchange, including
/// across the completion call, so concurrent submissions for the same
/// session run one after another.
pub async fn submit<C: Completion>(
    state: &AppState<C>,
    session: &Session,
    message: String,
) -> Vec<Turn> {
    let mut history = session.history.lock().await;
    history.append_user(message);

    let prompt = state.assembler.render(history.snapshot());
    match state.provider.complete(&state.model, &prompt).await {
        Ok(reply) => history.append_model(reply),
        Err(error) => {
            tracing::error!("completion failed: {error:#}");
            history.append_model_error(COMPLETION_ERROR_TEXT);
        }
    }

    session.touch();
    history.snapshot().to_vec()
}
