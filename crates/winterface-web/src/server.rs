//! HTTP listener lifecycle.
//!
//! [`ServerManager`] owns the embedded server: it binds one socket per
//! configured host, wraps the router with the trace and timeout layers, and
//! serves until told to stop. `start` blocks the calling task for the
//! lifetime of the server, so the expected deployment is "spawn it once";
//! `stop` can then be called from anywhere holding the manager.
//!
//! Lifecycle faults are returned, not swallowed: a failed bind or a dying
//! listener surfaces as a [`ServerError`] so the process entry point can
//! exit non-zero instead of limping along half-started.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::Request;
use tokio::net::TcpListener;
use tokio::sync::{Mutex, watch};
use tokio::task::JoinSet;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::Level;

use winterface_node::NodeInterface;

use crate::config::Config;
use crate::routes;
use crate::state::AppState;

/// Server lifecycle errors.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// A listener socket could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        /// The `host:port` that failed to bind.
        addr: String,
        source: std::io::Error,
    },

    /// A listener terminated with an I/O error while serving.
    #[error("listener failed: {0}")]
    Serve(#[from] std::io::Error),
}

/// Handle to a running (or once-running) server.
///
/// Cloneable; carries the bound addresses plus the shutdown signalling the
/// manager uses internally.
#[derive(Clone, Debug)]
pub struct ServerHandle {
    addrs: Vec<SocketAddr>,
    shutdown: watch::Sender<bool>,
    done: watch::Receiver<bool>,
}

impl ServerHandle {
    /// Addresses the server is bound on, one per configured host.
    pub fn addrs(&self) -> &[SocketAddr] {
        &self.addrs
    }
}

/// Owns the embedded HTTP server's lifecycle.
///
/// There is no ambient singleton: the process entry point constructs one
/// manager and keeps it for as long as it wants the server controllable.
pub struct ServerManager {
    config: Config,
    running: Mutex<Option<ServerHandle>>,
}

impl ServerManager {
    /// Manager for the given configuration. Nothing is bound yet.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            running: Mutex::new(None),
        }
    }

    /// Handle of the currently running server, if any.
    pub async fn handle(&self) -> Option<ServerHandle> {
        self.running.lock().await.clone()
    }

    /// Start the server and block until it is stopped.
    ///
    /// Binds one listener per configured host (any bind failure aborts the
    /// whole start), installs the access filter, trace and timeout layers,
    /// and serves all listeners until [`stop`](Self::stop) is called. If the
    /// server is already running this is a no-op returning the existing
    /// handle immediately.
    ///
    /// In dev mode the node handle is the same but the mode is surfaced to
    /// handlers through [`AppState`].
    pub async fn start(
        &self,
        dev_mode: bool,
        node: Arc<dyn NodeInterface>,
    ) -> Result<ServerHandle, ServerError> {
        let (listeners, handle, done_tx, shutdown_rx) = {
            let mut running = self.running.lock().await;
            if let Some(handle) = running.as_ref() {
                tracing::warn!("start requested while server is already running");
                return Ok(handle.clone());
            }

            let mut listeners = Vec::new();
            let mut addrs = Vec::new();
            for host in &self.config.bind_hosts {
                let addr = format!("{host}:{}", self.config.port);
                let listener =
                    TcpListener::bind(&addr)
                        .await
                        .map_err(|source| ServerError::Bind {
                            addr: addr.clone(),
                            source,
                        })?;
                let local = listener.local_addr()?;
                tracing::info!(addr = %local, "listening");
                addrs.push(local);
                listeners.push(listener);
            }

            let (shutdown_tx, shutdown_rx) = watch::channel(false);
            let (done_tx, done_rx) = watch::channel(false);
            let handle = ServerHandle {
                addrs,
                shutdown: shutdown_tx,
                done: done_rx,
            };
            *running = Some(handle.clone());
            (listeners, handle, done_tx, shutdown_rx)
        };

        let state = AppState::new(self.config.clone(), node, dev_mode);
        let app = routes::router(state)
            .layer(
                TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                    tracing::span!(
                        Level::INFO,
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                }),
            )
            .layer(TimeoutLayer::new(self.config.idle_timeout));

        let mut tasks = JoinSet::new();
        for listener in listeners {
            let app = app.clone();
            let mut shutdown = shutdown_rx.clone();
            tasks.spawn(async move {
                axum::serve(
                    listener,
                    app.into_make_service_with_connect_info::<SocketAddr>(),
                )
                .with_graceful_shutdown(async move {
                    let _ = shutdown.changed().await;
                })
                .await
            });
        }
        drop(shutdown_rx);

        // Blocks until every listener has terminated.
        let mut result = Ok(());
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(Ok(())) => {}
                Ok(Err(err)) => {
                    tracing::error!(error = %err, "listener failed");
                    if result.is_ok() {
                        result = Err(ServerError::Serve(err));
                    }
                }
                Err(err) => {
                    tracing::error!(error = %err, "listener task panicked");
                }
            }
        }

        *self.running.lock().await = None;
        let _ = done_tx.send(true);
        tracing::info!("server stopped");
        result.map(|()| handle)
    }

    /// Signal shutdown and wait for the server to fully terminate.
    ///
    /// A no-op when the server is not running.
    pub async fn stop(&self) {
        let handle = self.running.lock().await.clone();
        let Some(handle) = handle else {
            tracing::debug!("stop requested but server is not running");
            return;
        };
        tracing::info!("stopping server");
        let _ = handle.shutdown.send(true);

        let mut done = handle.done.clone();
        while !*done.borrow_and_update() {
            if done.changed().await.is_err() {
                break;
            }
        }
    }
}
