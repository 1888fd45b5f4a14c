//! Gateway session management.
//!
//! Each session owns one conversation history. The store maps session
//! ids to live sessions, creating on miss and evicting on idle age.
//! Per-session ordering of submissions comes from the history mutex,
//! which the dispatcher holds across the completion call.

use chat::ConversationHistory;
use compact_str::CompactString;
use std::{
    collections::BTreeMap,
    sync::{
        Arc, Mutex,
        atomic::{AtomicU64, Ordering},
    },
    time::{SystemTime, UNIX_EPOCH},
};

/// An active gateway session and its conversation state.
#[derive(Debug)]
pub struct Session {
    /// Unique session identifier (UUID v4).
    pub id: CompactString,
    /// Creation timestamp (unix seconds).
    pub created_at: u64,
    /// Last activity timestamp (unix seconds).
    last_active: AtomicU64,
    /// The conversation history. Submissions hold this lock across the
    /// completion call, so racing submissions for one session serialize.
    pub history: tokio::sync::Mutex<ConversationHistory>,
}

impl Session {
    fn new() -> Self {
        let now = unix_now();
        Self {
            id: CompactString::new(uuid::Uuid::new_v4().to_string()),
            created_at: now,
            last_active: AtomicU64::new(now),
            history: tokio::sync::Mutex::new(ConversationHistory::new()),
        }
    }

    /// Refresh the last-activity timestamp.
    pub fn touch(&self) {
        self.last_active.store(unix_now(), Ordering::Relaxed);
    }

    /// Last activity timestamp (unix seconds).
    pub fn last_active(&self) -> u64 {
        self.last_active.load(Ordering::Relaxed)
    }
}

/// Keyed store of live sessions with thread-safe interior mutability.
pub struct SessionStore {
    sessions: Mutex<BTreeMap<CompactString, Arc<Session>>>,
}

impl SessionStore {
    /// Create a new empty session store.
    pub fn new() -> Self {
        Self {
            sessions: Mutex::new(BTreeMap::new()),
        }
    }

    /// Create a fresh session with an empty history.
    pub fn create(&self) -> Arc<Session> {
        let session = Arc::new(Session::new());
        self.sessions
            .lock()
            .unwrap()
            .insert(session.id.clone(), Arc::clone(&session));
        session
    }

    /// Get a session by id.
    pub fn get(&self, id: &str) -> Option<Arc<Session>> {
        self.sessions.lock().unwrap().get(id).cloned()
    }

    /// Resolve the session for a request: a known id returns its live
    /// session, anything else creates a fresh one. Client-supplied ids
    /// are never adopted as new keys.
    pub fn open(&self, id: Option<&str>) -> Arc<Session> {
        if let Some(session) = id.and_then(|id| self.get(id)) {
            session.touch();
            return session;
        }
        self.create()
    }

    /// Start a conversation over: replace the session's history with an
    /// empty one, keeping the id. Unknown or absent ids create a new
    /// session instead.
    pub async fn reset(&self, id: Option<&str>) -> Arc<Session> {
        let session = self.open(id);
        *session.history.lock().await = ConversationHistory::new();
        session
    }

    /// Remove all sessions idle longer than `max_age_secs`, destroying
    /// their histories. Returns the number evicted.
    pub fn cleanup_expired(&self, max_age_secs: u64) -> usize {
        let cutoff = unix_now().saturating_sub(max_age_secs);
        let mut sessions = self.sessions.lock().unwrap();
        let before = sessions.len();
        sessions.retain(|_, s| s.last_active() >= cutoff);
        before - sessions.len()
    }

    /// Get the number of active sessions.
    pub fn len(&self) -> usize {
        self.sessions.lock().unwrap().len()
    }

    /// Check if there are no active sessions.
    pub fn is_empty(&self) -> bool {
        self.sessions.lock().unwrap().is_empty()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
