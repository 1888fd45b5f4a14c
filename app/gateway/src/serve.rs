//! Shared serve entrypoint — used by the binary and the end-to-end tests.

use crate::{http, state::AppState};
use anyhow::Result;
use llm::Completion;
use std::{sync::Arc, time::Duration};
use tokio::sync::oneshot;

/// How often the session sweeper checks for idle sessions.
const SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// Handle returned by [`serve`] — holds the bound port and shutdown trigger.
pub struct ServeHandle {
    /// The port the gateway is listening on.
    pub port: u16,
    /// Send a value to trigger graceful shutdown.
    shutdown_tx: Option<oneshot::Sender<()>>,
    /// Join handle for the server task.
    join: Option<tokio::task::JoinHandle<Result<(), std::io::Error>>>,
    /// Join handle for the session sweeper task.
    sweeper: Option<tokio::task::JoinHandle<()>>,
}

impl ServeHandle {
    /// Trigger graceful shutdown and wait for the server to stop.
    pub async fn shutdown(mut self) -> Result<()> {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(sweeper) = self.sweeper.take() {
            sweeper.abort();
        }
        if let Some(join) = self.join.take() {
            join.await??;
        }
        Ok(())
    }
}

/// Bind the axum server and start serving `state`.
///
/// Returns a [`ServeHandle`] with the bound port and a shutdown trigger;
/// bind to port 0 to let the OS pick. The server runs in a spawned task
/// alongside a sweeper that evicts sessions idle past `session_ttl`.
pub async fn serve<C: Completion + 'static>(
    state: AppState<C>,
    bind: &str,
    session_ttl: Duration,
) -> Result<ServeHandle> {
    let sessions = Arc::clone(&state.sessions);
    let app = http::router(state);
    let listener = tokio::net::TcpListener::bind(bind).await?;
    let port = listener.local_addr()?.port();
    tracing::info!("gateway listening on {bind} (port {port})");

    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let join = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await
    });

    let sweeper = tokio::spawn(async move {
        let mut tick = tokio::time::interval(SWEEP_INTERVAL);
        // The first tick completes immediately.
        tick.tick().await;
        loop {
            tick.tick().await;
            let evicted = sessions.cleanup_expired(session_ttl.as_secs());
            if evicted > 0 {
                tracing::debug!("evicted {evicted} idle sessions");
            }
        }
    });

    Ok(ServeHandle {
        port,
        shutdown_tx: Some(shutdown_tx),
        join: Some(join),
        sweeper: Some(sweeper),
    })
}
