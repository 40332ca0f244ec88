//! API server lifecycle — bind → spawn background task → return handle
//! with a shutdown channel.

use std::net::SocketAddr;
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::oneshot;

use crate::api::router::directory_router;
use crate::state::AppState;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },
}

/// Handle to a running directory server.
pub struct ApiServer {
    pub addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl ApiServer {
    /// Shut down the server gracefully.
    pub fn shutdown(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
            tracing::info!("Directory server shutdown signal sent");
        }
    }
}

/// Bind the directory server, mount the router, and spawn it in a
/// background tokio task. Returns a handle carrying the bound address
/// and a shutdown channel.
pub async fn start_server(
    state: Arc<AppState>,
    addr: SocketAddr,
) -> Result<ApiServer, ServerError> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    // Resolve the actual address (port 0 binds ephemeral in tests).
    let bound = listener.local_addr().map_err(|source| ServerError::Bind { addr, source })?;
    tracing::info!(%bound, "Directory server binding");

    let app = directory_router(state);
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    tokio::spawn(async move {
        let serve = axum::serve(listener, app).with_graceful_shutdown(async {
            let _ = shutdown_rx.await;
        });
        if let Err(e) = serve.await {
            tracing::error!("Directory server error: {e}");
        }
        tracing::info!("Directory server stopped");
    });

    Ok(ApiServer {
        addr: bound,
        shutdown_tx: Some(shutdown_tx),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn server_starts_and_shuts_down() {
        let dir = tempfile::tempdir().unwrap();
        let state = Arc::new(AppState::new(dir.path().join("directory.db")).unwrap());

        let addr: SocketAddr = "127.0.0.1:0".parse().unwrap();
        let mut server = start_server(state, addr).await.unwrap();
        assert_ne!(server.addr.port(), 0);

        server.shutdown();
        // Second shutdown is a no-op
        server.shutdown();
    }
}
