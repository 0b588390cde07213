//! The axum HTTP server: shared state, router, and serve loop.

pub mod api;
pub mod router;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;

use crate::config::Listen;
use crate::restart::RestartHook;
use crate::ssl::SslStore;
use crate::store::EnvStore;

/// Errors from starting or running the HTTP server.
#[derive(Debug, Error)]
pub enum ServeError {
    /// Failed to bind the configured listener.
    #[error("failed to bind {listen}: {source}")]
    Bind {
        /// The listener description.
        listen: Listen,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The accept loop failed.
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Shared, cloneable handler state.
///
/// Requests hold no state of their own; every read re-parses from disk and
/// every save rewrites the whole file, so the shared state is just the
/// collaborators plus two configuration values.
#[derive(Debug, Clone)]
pub struct AppState {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    env: EnvStore,
    ssl: SslStore,
    restart: RestartHook,
    tls_key: String,
    ui_dir: PathBuf,
}

impl AppState {
    /// Creates the shared state from its collaborators.
    #[must_use]
    pub fn new(
        env: EnvStore,
        ssl: SslStore,
        restart: RestartHook,
        tls_key: impl Into<String>,
        ui_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                env,
                ssl,
                restart,
                tls_key: tls_key.into(),
                ui_dir: ui_dir.into(),
            }),
        }
    }

    /// The `.env` file store.
    #[must_use]
    pub fn env(&self) -> &EnvStore {
        &self.inner.env
    }

    /// The SSL slot store.
    #[must_use]
    pub fn ssl(&self) -> &SslStore {
        &self.inner.ssl
    }

    /// The restart hook.
    #[must_use]
    pub fn restart(&self) -> &RestartHook {
        &self.inner.restart
    }

    /// Name of the TLS setting updated after a cert+key upload.
    #[must_use]
    pub fn tls_key(&self) -> &str {
        &self.inner.tls_key
    }

    /// Directory of static UI assets.
    #[must_use]
    pub fn ui_dir(&self) -> &Path {
        &self.inner.ui_dir
    }
}

/// Starts the HTTP server and runs until ctrl-c.
///
/// # Errors
///
/// Returns [`ServeError`] if the listener cannot be bound or the accept
/// loop fails.
pub async fn start_server(state: AppState, listen: Listen) -> Result<(), ServeError> {
    let app = router::create_router(state);

    match listen {
        Listen::Tcp(addr) => {
            let listener = tokio::net::TcpListener::bind(&addr)
                .await
                .map_err(|source| ServeError::Bind {
                    listen: Listen::Tcp(addr.clone()),
                    source,
                })?;
            tracing::info!("listening on http://{addr}");

            axum::serve(listener, app)
                .with_graceful_shutdown(shutdown_signal())
                .await
                .map_err(ServeError::Serve)
        }
        #[cfg(unix)]
        Listen::Unix(path) => {
            let listener = bind_unix(&path).map_err(|source| ServeError::Bind {
                listen: Listen::Unix(path.clone()),
                source,
            })?;
            tracing::info!("listening on unix socket {}", path.display());

            axum::serve(listener, app)
                .with_graceful_shutdown(shutdown_signal())
                .await
                .map_err(ServeError::Serve)
        }
        #[cfg(not(unix))]
        Listen::Unix(path) => Err(ServeError::Bind {
            listen: Listen::Unix(path),
            source: std::io::Error::new(
                std::io::ErrorKind::Unsupported,
                "unix sockets are not supported on this platform",
            ),
        }),
    }
}

/// Binds a Unix socket, removing a stale socket file first.
#[cfg(unix)]
fn bind_unix(path: &Path) -> std::io::Result<tokio::net::UnixListener> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    match std::fs::remove_file(path) {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(e),
    }

    tokio::net::UnixListener::bind(path)
}

/// Resolves when ctrl-c is received.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
    }
}
