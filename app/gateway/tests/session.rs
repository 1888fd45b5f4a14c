//! Session store tests.

use gabble_gateway::SessionStore;

#[test]
fn create_and_get_session() {
    let store = SessionStore::new();
    let session = store.create();
    assert!(!session.id.is_empty());

    let retrieved = store.get(&session.id).unwrap();
    assert_eq!(retrieved.id, session.id);
}

#[test]
fn created_sessions_get_distinct_ids() {
    let store = SessionStore::new();
    let a = store.create();
    let b = store.create();
    assert_ne!(a.id, b.id);
    assert_eq!(store.len(), 2);
}

#[test]
fn open_with_known_id_returns_the_same_session() {
    let store = SessionStore::new();
    let created = store.create();

    let opened = store.open(Some(created.id.as_str()));
    assert_eq!(opened.id, created.id);
    assert_eq!(store.len(), 1);
}

#[test]
fn open_with_unknown_id_mints_a_fresh_session() {
    let store = SessionStore::new();
    let session = store.open(Some("not-a-live-session"));
    assert_ne!(session.id.as_str(), "not-a-live-session");
    assert!(store.get("not-a-live-session").is_none());
    assert_eq!(store.len(), 1);
}

#[test]
fn open_without_id_mints_a_fresh_session() {
    let store = SessionStore::new();
    let session = store.open(None);
    assert!(store.get(&session.id).is_some());
}

#[tokio::test]
async fn new_session_history_is_empty() {
    let store = SessionStore::new();
    let session = store.create();
    assert!(session.history.lock().await.is_empty());
}

#[tokio::test]
async fn reset_keeps_id_and_clears_history() {
    let store = SessionStore::new();
    let session = store.create();
    session.history.lock().await.append_user("hello");
    assert_eq!(session.history.lock().await.len(), 1);

    let reset = store.reset(Some(session.id.as_str())).await;
    assert_eq!(reset.id, session.id);
    assert!(reset.history.lock().await.is_empty());
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn reset_without_id_creates_a_session() {
    let store = SessionStore::new();
    let session = store.reset(None).await;
    assert!(session.history.lock().await.is_empty());
    assert_eq!(store.len(), 1);
}

#[test]
fn touch_updates_last_active() {
    let store = SessionStore::new();
    let session = store.create();
    let original = session.last_active();

    // Sleep briefly to ensure the timestamp changes
    std::thread::sleep(std::time::Duration::from_millis(1100));
    session.touch();
    assert!(session.last_active() > original);
}

#[test]
fn created_at_is_fixed_while_activity_moves() {
    let store = SessionStore::new();
    let session = store.create();
    let created = session.created_at;
    assert!(created > 0);
    assert!(created <= session.last_active());

    std::thread::sleep(std::time::Duration::from_millis(1100));
    session.touch();
    assert_eq!(session.created_at, created);
    assert!(session.last_active() > created);
}

#[test]
fn cleanup_expired_evicts_idle_sessions() {
    let store = SessionStore::new();
    let _a = store.create();
    let _b = store.create();
    assert_eq!(store.len(), 2);

    // Sleep so sessions are in the past, then cleanup with 0 max age
    std::thread::sleep(std::time::Duration::from_millis(1100));
    let evicted = store.cleanup_expired(0);
    assert_eq!(evicted, 2);
    assert!(store.is_empty());
}

#[test]
fn cleanup_spares_recently_active_sessions() {
    let store = SessionStore::new();
    let _session = store.create();
    let evicted = store.cleanup_expired(3600);
    assert_eq!(evicted, 0);
    assert_eq!(store.len(), 1);
}

#[test]
fn default_session_store() {
    let store = SessionStore::default();
    assert!(store.is_empty());
}
