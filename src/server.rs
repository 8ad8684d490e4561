//! Static server bootstrap
//!
//! Binds a listener from an explicit [`Config`] and serves the static root
//! on a background task. Used by the CLI (main.rs) and by the integration
//! tests, which bind port 0.

use std::net::SocketAddr;
use std::path::Path;

use axum::Router;
use tokio::task::JoinHandle;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::errors::ServeError;

/// Builds the router: every request path maps into the static root.
///
/// Content type inference, 404 on a miss and `index.html` directory
/// resolution are all `ServeDir`'s.
pub fn build_router(static_root: &Path) -> Router {
    Router::new()
        .nest_service("/", ServeDir::new(static_root))
        .layer(TraceLayer::new_for_http())
}

/// A running static server.
pub struct ServerHandle {
    addr: SocketAddr,
    task: JoinHandle<()>,
}

impl ServerHandle {
    /// The address the listener actually bound (resolves port 0).
    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    /// Parks until the serve task exits.
    pub async fn wait(self) {
        let _ = self.task.await;
    }

    pub fn shutdown(&self) {
        self.task.abort();
    }
}

/// Binds the listener and starts serving on a background task.
///
/// A bind failure (port taken, insufficient privilege) comes back to the
/// caller; there is no retry and no fallback port.
pub async fn start(config: &Config) -> Result<ServerHandle, ServeError> {
    let app = build_router(&config.static_root);
    let addr = SocketAddr::new(config.bind_addr, config.port);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| ServeError::Bind(format!("Failed to bind to {}: {}", addr, e)))?;
    let addr = listener
        .local_addr()
        .map_err(|e| ServeError::Bind(format!("Failed to read bound address: {}", e)))?;

    tracing::info!("Static server listening on {}", addr);

    let task = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!("HTTP server error: {}", e);
        }
    });

    Ok(ServerHandle { addr, task })
}
