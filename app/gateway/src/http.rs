//! HTTP surface: axum routes and their wire types.

use crate::{dispatch, state::AppState};
use axum::{Json, Router, extract::State, routing::post};
use chat::Turn;
use compact_str::CompactString;
use llm::Completion;
use serde::{Deserialize, Serialize};

/// Build the axum router with the conversation endpoints.
pub fn router<C: Completion + 'static>(state: AppState<C>) -> Router {
    Router::new()
        .route("/new", post(new_conversation::<C>))
        .route("/submit", post(submit::<C>))
        .with_state(state)
}

/// Body for `POST /new`. The whole body may be omitted.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NewConversationRequest {
    /// Session to start over; omitted to mint a fresh session.
    #[serde(default)]
    pub session: Option<CompactString>,
}

/// Body for `POST /submit`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SubmitRequest {
    /// Session to continue; omitted or unknown mints a fresh session.
    #[serde(default)]
    pub session: Option<CompactString>,
    /// Message content. May be empty.
    pub message: String,
}

/// Reply carrying the session id and the full ordered transcript.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConversationReply {
    /// The session the turns belong to; clients echo it on later calls.
    pub session: CompactString,
    /// The updated transcript, oldest first.
    pub turns: Vec<Turn>,
}

/// `POST /new`: reset or create a conversation. No completion call.
async fn new_conversation<C: Completion>(
    State(state): State<AppState<C>>,
    body: Option<Json<NewConversationRequest>>,
) -> Json<ConversationReply> {
    let request = body.map(|Json(request)| request).unwrap_or_default();
    let session = state.sessions.reset(request.session.as_deref()).await;
    tracing::debug!(session = %session.id, "conversation reset");
    Json(ConversationReply {
        session: session.id.clone(),
        turns: Vec::new(),
    })
}

/// `POST /submit`: run one exchange and return the updated transcript.
async fn submit<C: Completion>(
    State(state): State<AppState<C>>,
    Json(request): Json<SubmitRequest>,
) -> Json<ConversationReply> {
    let session = state.sessions.open(request.session.as_deref());
    tracing::debug!(session = %session.id, "submit");
    let turns = dispatch::submit(&state, &session, request.message).await;
    Json(ConversationReply {
        session: session.id.clone(),
        turns,
    })
}
