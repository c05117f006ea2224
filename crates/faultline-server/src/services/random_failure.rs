//! Simulated random failure.

use std::sync::Arc;

use async_trait::async_trait;

use faultline_core::error::{FaultlineError, Result};
use faultline_core::metrics::CounterHandle;

use crate::dispatch::{Handler, Reply, RequestCtx};
use crate::random::RandomSource;

pub struct RandomFailureHandler {
    requests: CounterHandle,
    random: Arc<dyn RandomSource>,
    failure_rate: f64,
}

impl RandomFailureHandler {
    pub fn new(requests: CounterHandle, random: Arc<dyn RandomSource>, failure_rate: f64) -> Self {
        Self { requests, random, failure_rate }
    }
}

#[async_trait]
impl Handler for RandomFailureHandler {
    async fn handle(&self, _req: RequestCtx) -> Result<Reply> {
        self.requests.inc();

        let draw = self.random.next_f64();
        if draw < self.failure_rate {
            return Err(FaultlineError::Handler(format!(
                "simulated failure (draw={draw:.3}, rate={})",
                self.failure_rate
            )));
        }
        Ok(Reply::text("Random success"))
    }
}
