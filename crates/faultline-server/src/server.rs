//! HTTP server lifecycle.
//!
//! A `Server` starts `Stopped` and moves to `Running` once its listener is
//! bound. There is no drain or reload; it runs until the process exits.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;

use faultline_core::error::{FaultlineError, Result};

use crate::dispatch::RouteTable;
use crate::router;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerState {
    Stopped,
    Running,
}

pub struct Server {
    routes: Arc<RouteTable>,
    running: AtomicBool,
}

impl Server {
    /// Freeze the route table. Routes cannot be added afterwards.
    pub fn new(routes: RouteTable) -> Self {
        Self {
            routes: Arc::new(routes),
            running: AtomicBool::new(false),
        }
    }

    pub fn state(&self) -> ServerState {
        if self.running.load(Ordering::Acquire) {
            ServerState::Running
        } else {
            ServerState::Stopped
        }
    }

    pub fn router(&self) -> Router {
        router::build_router(Arc::clone(&self.routes))
    }

    /// Bind `addr` and serve forever. Bind failure is returned, not retried.
    pub async fn serve(&self, addr: SocketAddr) -> Result<()> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| FaultlineError::Bind(format!("{addr}: {e}")))?;
        self.serve_listener(listener).await
    }

    pub async fn serve_listener(&self, listener: TcpListener) -> Result<()> {
        let local = listener
            .local_addr()
            .map_err(|e| FaultlineError::Bind(format!("local_addr: {e}")))?;

        if self.running.swap(true, Ordering::AcqRel) {
            return Err(FaultlineError::Internal("server already running".into()));
        }
        tracing::info!(listen = %local, routes = ?self.routes.paths(), "faultline running");

        axum::serve(listener, self.router())
            .await
            .map_err(|e| FaultlineError::Internal(format!("server failed: {e}")))
    }
}
