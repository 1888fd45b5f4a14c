//! Gabble gateway — application shell composing sessions, prompt
//! assembly, the completion provider, and the HTTP surface.

pub mod config;
pub mod dispatch;
pub mod http;
pub mod serve;
pub mod session;
pub mod state;

pub use config::GatewayConfig;
pub use http::{ConversationReply, NewConversationRequest, SubmitRequest, router};
pub use serve::{ServeHandle, serve};
pub use session::{Session, SessionStore};
pub use state::AppState;
