//! Simulated latency.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::time::{sleep, Duration};

use faultline_core::error::Result;
use faultline_core::metrics::CounterHandle;

use crate::dispatch::{Handler, Reply, RequestCtx};
use crate::random::RandomSource;

pub struct SlowHandler {
    requests: CounterHandle,
    random: Arc<dyn RandomSource>,
    min_ms: u64,
    max_ms: u64,
}

impl SlowHandler {
    pub fn new(requests: CounterHandle, random: Arc<dyn RandomSource>, min_ms: u64, max_ms: u64) -> Self {
        Self { requests, random, min_ms, max_ms }
    }
}

#[async_trait]
impl Handler for SlowHandler {
    async fn handle(&self, _req: RequestCtx) -> Result<Reply> {
        self.requests.inc();

        let delay_ms = self.random.next_range(self.min_ms, self.max_ms);
        tracing::debug!(delay_ms, "delaying response");
        sleep(Duration::from_millis(delay_ms)).await;

        Ok(Reply::text(format!("Slow response after {delay_ms} ms")))
    }
}
