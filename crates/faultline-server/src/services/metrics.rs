//! `/metrics`: Prometheus text format.

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;

use faultline_core::error::Result;
use faultline_core::metrics::{CounterRegistry, CONTENT_TYPE};

use crate::dispatch::{Handler, Reply, RequestCtx};

pub struct MetricsHandler {
    registry: Arc<CounterRegistry>,
}

impl MetricsHandler {
    pub fn new(registry: Arc<CounterRegistry>) -> Self {
        Self { registry }
    }
}

#[async_trait]
impl Handler for MetricsHandler {
    async fn handle(&self, _req: RequestCtx) -> Result<Reply> {
        Ok(Reply::new(StatusCode::OK, self.registry.render(), CONTENT_TYPE))
    }
}
