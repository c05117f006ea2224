//! Simulated CPU load.

use async_trait::async_trait;

use faultline_core::error::{FaultlineError, Result};
use faultline_core::metrics::CounterHandle;

use crate::dispatch::{Handler, Reply, RequestCtx};

pub struct LoadHandler {
    requests: CounterHandle,
    iterations: u64,
}

impl LoadHandler {
    pub fn new(requests: CounterHandle, iterations: u64) -> Self {
        Self { requests, iterations }
    }
}

#[async_trait]
impl Handler for LoadHandler {
    async fn handle(&self, _req: RequestCtx) -> Result<Reply> {
        self.requests.inc();

        let n = self.iterations;
        // Keep the loop off the async workers.
        let sum = tokio::task::spawn_blocking(move || burn(n))
            .await
            .map_err(|e| FaultlineError::Handler(format!("load task failed: {e}")))?;

        Ok(Reply::text(format!("Load generated: {sum}")))
    }
}

fn burn(n: u64) -> u64 {
    (0..n).fold(0u64, |acc, i| std::hint::black_box(acc.wrapping_add(i)))
}

#[cfg(test)]
mod tests {
    use super::burn;

    #[test]
    fn sums_the_range() {
        assert_eq!(burn(0), 0);
        assert_eq!(burn(5), 10);
        assert_eq!(burn(10_000), 49_995_000);
    }
}
