use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    extract::State,
    http::{header, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use dashmap::{mapref::entry::Entry, DashMap};
use futures_util::FutureExt;

use faultline_core::error::{FaultlineError, Result};

use super::reply::{Reply, TEXT_PLAIN};

/// Per-request view handed to a handler.
#[derive(Debug, Clone)]
pub struct RequestCtx {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
}

/// A unit of logic bound to one path.
#[async_trait]
pub trait Handler: Send + Sync {
    async fn handle(&self, req: RequestCtx) -> Result<Reply>;
}

/// Exact-match path -> handler table, filled at startup.
#[derive(Default)]
pub struct RouteTable {
    routes: DashMap<String, Arc<dyn Handler>>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self {
            routes: DashMap::new(),
        }
    }

    /// Bind `path` to `handler`. A path can only be bound once.
    pub fn add_route(&self, path: &str, handler: Arc<dyn Handler>) -> Result<()> {
        if !path.starts_with('/') {
            return Err(FaultlineError::BadRequest(format!(
                "route path must start with '/': {path}"
            )));
        }
        match self.routes.entry(path.to_string()) {
            Entry::Occupied(_) => Err(FaultlineError::Conflict(path.to_string())),
            Entry::Vacant(slot) => {
                slot.insert(handler);
                tracing::debug!(path = %path, "route bound");
                Ok(())
            }
        }
    }

    pub fn get(&self, path: &str) -> Option<Arc<dyn Handler>> {
        self.routes.get(path).map(|e| Arc::clone(e.value()))
    }

    /// Bound paths, sorted.
    pub fn paths(&self) -> Vec<String> {
        let mut paths: Vec<String> = self.routes.iter().map(|e| e.key().clone()).collect();
        paths.sort();
        paths
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Axum fallback: every request lands here and is matched against the table.
///
/// Handler errors and panics are turned into a 500 for this request only.
pub async fn dispatch(State(routes): State<Arc<RouteTable>>, method: Method, uri: Uri) -> Response {
    let path = uri.path().to_string();

    let Some(handler) = routes.get(&path) else {
        tracing::debug!(%method, path = %path, "no route");
        return Reply::not_found().into_response();
    };

    if method != Method::GET && method != Method::HEAD {
        return (
            StatusCode::METHOD_NOT_ALLOWED,
            [(header::ALLOW, "GET, HEAD"), (header::CONTENT_TYPE, TEXT_PLAIN)],
            "method not allowed",
        )
            .into_response();
    }

    let head = method == Method::HEAD;
    let ctx = RequestCtx {
        method: method.clone(),
        path: path.clone(),
        query: uri.query().map(str::to_string),
    };

    let reply = match AssertUnwindSafe(handler.handle(ctx)).catch_unwind().await {
        Ok(Ok(reply)) => reply,
        Ok(Err(e)) => {
            tracing::warn!(%method, path = %path, error = %e, "handler failed");
            Reply::from_error(&e)
        }
        Err(panic) => {
            let msg = panic_message(panic.as_ref());
            tracing::error!(%method, path = %path, panic = %msg, "handler panicked");
            Reply::from_error(&FaultlineError::Internal(format!("handler panicked: {msg}")))
        }
    };

    tracing::debug!(%method, path = %path, status = reply.status.as_u16(), "request served");

    if head {
        Reply { body: bytes::Bytes::new(), ..reply }.into_response()
    } else {
        reply.into_response()
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
